// Chunk: docs/chunks/python_lexer - Hand-written single-line lexer for Python-like source

//! code-window-syntax: single-line syntax highlighting for the code window.
//!
//! Each line is tokenized on its own from a clean slate, so there is no
//! parse tree to keep in sync with edits.
//!
//! # Overview
//!
//! - [`Lexer`]: one pass over a line, yielding [`Token`]s that partition it.
//! - [`tokenize`] / [`Highlighter`]: groups tokens into colored
//!   [`Segment`](code_window_buffer::Segment)s.
//! - [`Vocabulary`]: keyword, builtin and name-introducer tables.
//! - [`Theme`]: maps color tags to RGB colors.
//!
//! # Example
//!
//! ```
//! use code_window_buffer::ColorTag;
//! use code_window_syntax::tokenize;
//!
//! let segments = tokenize("self.name = \"x\"");
//! let tags: Vec<ColorTag> = segments.iter().map(|s| s.tag).collect();
//! assert_eq!(
//!     tags,
//!     vec![
//!         ColorTag::SelfRef,
//!         ColorTag::Default,
//!         ColorTag::Attribute,
//!         ColorTag::Default,
//!         ColorTag::String,
//!     ]
//! );
//! ```

mod highlighter;
mod lexer;
mod theme;
mod vocabulary;

pub use highlighter::{tokenize, tokenize_with, Highlighter};
pub use lexer::{IdentClass, Lexer, Token, TokenKind};
pub use theme::{Rgb, Theme};
pub use vocabulary::{NameKind, Vocabulary, PYTHON_BUILTINS, PYTHON_KEYWORDS};
