// Chunk: docs/chunks/syntax_theme - Dark editor palette for color tags

//! Color theme mapping color tags to RGB colors.
//!
//! The tags are what the tokenizer produces; colors are only a hint for the
//! presentation layer, which is free to use its own palette.

use code_window_buffer::ColorTag;
use std::collections::HashMap;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Dark editor palette constants.
mod palette {
    use super::Rgb;

    pub const PURPLE: Rgb = Rgb::new(0xc0, 0x84, 0xfc); // #c084fc
    pub const YELLOW: Rgb = Rgb::new(0xfd, 0xe0, 0x47); // #fde047
    pub const BLUE: Rgb = Rgb::new(0x60, 0xa5, 0xfa); // #60a5fa
    pub const LIGHT_BLUE: Rgb = Rgb::new(0x93, 0xc5, 0xfd); // #93c5fd
    pub const ORANGE: Rgb = Rgb::new(0xfb, 0x92, 0x3c); // #fb923c
    pub const GREEN: Rgb = Rgb::new(0x4a, 0xde, 0x80); // #4ade80
    pub const CYAN: Rgb = Rgb::new(0x67, 0xe8, 0xf9); // #67e8f9
    pub const INDIGO: Rgb = Rgb::new(0xa5, 0xb4, 0xfc); // #a5b4fc
    pub const GRAY: Rgb = Rgb::new(0x6b, 0x72, 0x80); // #6b7280
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff); // #ffffff
}

/// A mapping from color tags to colors.
#[derive(Debug, Clone)]
pub struct Theme {
    colors: HashMap<ColorTag, Rgb>,
    fallback: Rgb,
}

impl Theme {
    /// The dark palette the prologue was designed against.
    pub fn dark() -> Self {
        let colors = HashMap::from([
            (ColorTag::Keyword, palette::PURPLE),
            (ColorTag::TypeName, palette::YELLOW),
            (ColorTag::Decorator, palette::YELLOW),
            (ColorTag::FunctionName, palette::BLUE),
            (ColorTag::Dunder, palette::BLUE),
            (ColorTag::Attribute, palette::LIGHT_BLUE),
            (ColorTag::SelfRef, palette::ORANGE),
            (ColorTag::String, palette::GREEN),
            (ColorTag::Number, palette::CYAN),
            (ColorTag::Builtin, palette::INDIGO),
            (ColorTag::Comment, palette::GRAY),
            (ColorTag::Default, palette::WHITE),
        ]);
        Self {
            colors,
            fallback: palette::WHITE,
        }
    }

    /// Returns the color for `tag`.
    pub fn color(&self, tag: ColorTag) -> Rgb {
        self.colors.get(&tag).copied().unwrap_or(self.fallback)
    }

    /// Overrides the color of one tag.
    pub fn set_color(&mut self, tag: ColorTag, color: Rgb) {
        self.colors.insert(tag, color);
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
