// Chunk: docs/chunks/demo_binary - Replay stdin into a code window and print it
//!
//! code-window demo.
//!
//! Reads text from stdin, types it into a [`CodeWindow`] one key at a time,
//! and prints the resulting window with its line-number gutter.
//!
//! ```text
//! printf 'def greet(name):\n\tprint(f"hi {name}")\n' | code-window
//! ```
//!
//! Newline is Enter, tab is the indent key, and backspace/DEL delete.
//! Carriage returns are skipped. Logging goes to stderr and is controlled
//! with `RUST_LOG`.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use code_window::{render, CodeWindow, EditorConfig, Key, KeyEvent, Theme};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Type stdin into a simulated Python editor and print it highlighted.
#[derive(Parser)]
#[command(name = "code-window", version)]
struct Args {
    /// JSON configuration file
    #[arg(short, long, env = "CODE_WINDOW_CONFIG")]
    config: Option<PathBuf>,

    /// Print without ANSI colors
    #[arg(long)]
    plain: bool,
}

/// Maps one input character to the key that would produce it.
fn key_for(ch: char) -> Option<KeyEvent> {
    match ch {
        '\n' => Some(KeyEvent::plain(Key::Return)),
        '\t' => Some(KeyEvent::plain(Key::Tab)),
        '\x08' | '\x7f' => Some(KeyEvent::plain(Key::Backspace)),
        '\r' => None,
        ch => Some(KeyEvent::char(ch)),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "code_window=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EditorConfig::default(),
    };
    let config = config.with_env_overrides()?;
    let mut window = CodeWindow::new(config)?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;

    // No layout engine here; the estimator stands in for the host's measurer.
    let observer = window.observe_height();
    for key in input.chars().filter_map(key_for) {
        window.handle_key(&key);
        let height = window.estimator().estimate_height_px(window.current_len());
        observer.observe(height);
        window.process_pending_events();
    }
    tracing::info!(
        lines = window.committed().len(),
        rows = window.row_count(),
        "replayed input"
    );

    let theme = (!args.plain).then(Theme::dark);
    let output = render::render(&window.snapshot(), theme.as_ref());
    io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("writing output")?;
    Ok(())
}
