//! Text spans and style types for console output.

use crate::types::Shape;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-span styling. `fg: None` keeps the terminal's default color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanStyle {
    pub fg: Option<Rgb>,
    pub bold: bool,
    pub dim: bool,
}

impl SpanStyle {
    pub const PLAIN: SpanStyle = SpanStyle {
        fg: None,
        bold: false,
        dim: false,
    };

    pub const fn fg(color: Rgb) -> Self {
        Self {
            fg: Some(color),
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::PLAIN,
        }
    }

    pub fn styled(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One output line.
pub type ViewLine = Vec<Span>;

/// Concatenate the text of a line, dropping styles.
pub fn line_text(line: &[Span]) -> String {
    line.iter().map(|s| s.text.as_str()).collect()
}

/// Display color for each shape.
pub fn shape_color(shape: Shape) -> Rgb {
    match shape {
        Shape::I => Rgb::new(80, 220, 220),
        Shape::O => Rgb::new(240, 220, 80),
        Shape::T => Rgb::new(200, 120, 220),
        Shape::L => Rgb::new(255, 165, 0),
    }
}
