//! Style attribute value types.
//!
//! These are platform-independent: a rendering layer maps them onto whatever
//! its font system expects.
//!
//! # Example
//!
//! ```
//! use dynamic_styles::prelude::{FontWeight, TextAlignment};
//!
//! assert_eq!(TextAlignment::from_document("center"), TextAlignment::Center);
//! // Unknown names fall back to left alignment.
//! assert_eq!(TextAlignment::from_document("middle"), TextAlignment::Left);
//!
//! assert!(FontWeight::BOLD > FontWeight::REGULAR);
//! assert_eq!(FontWeight::default(), FontWeight::REGULAR);
//! ```

use std::fmt;

/// Font weight on a platform-independent scale.
///
/// The scale runs from `-1.0` (thinnest) to `1.0` (heaviest), with `0.0`
/// being the regular weight. The named constants follow the common system
/// font weight table.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Ultra light.
    pub const ULTRA_LIGHT: Self = Self(-0.8);
    /// Thin.
    pub const THIN: Self = Self(-0.6);
    /// Light.
    pub const LIGHT: Self = Self(-0.4);
    /// Regular weight, the root default.
    pub const REGULAR: Self = Self(0.0);
    /// Medium.
    pub const MEDIUM: Self = Self(0.23);
    /// Semibold.
    pub const SEMIBOLD: Self = Self(0.3);
    /// Bold.
    pub const BOLD: Self = Self(0.4);
    /// Heavy.
    pub const HEAVY: Self = Self(0.56);
    /// Black.
    pub const BLACK: Self = Self(0.62);

    /// Create a weight from a raw scale value.
    ///
    /// Values outside `-1.0..=1.0` are clamped.
    pub fn new(value: f32) -> Self {
        Self(value.clamp(-1.0, 1.0))
    }

    /// The raw scale value.
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::REGULAR
    }
}

impl From<f32> for FontWeight {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// Align to the left edge.
    Left,
    /// Center the text.
    Center,
    /// Align to the right edge.
    Right,
    /// Justify text to fill the available width.
    Justified,
    /// Follow the writing direction of the text.
    Natural,
}

impl TextAlignment {
    /// Parse an alignment name, returning `None` for unknown names.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            "justified" => Some(Self::Justified),
            "natural" => Some(Self::Natural),
            _ => None,
        }
    }

    /// Parse an alignment as written in a style document.
    ///
    /// Any unrecognized name resolves to [`TextAlignment::Left`].
    pub fn from_document(s: &str) -> Self {
        Self::parse(s).unwrap_or(Self::Left)
    }

    /// The document name of this alignment.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justified => "justified",
            Self::Natural => "natural",
        }
    }
}

impl fmt::Display for TextAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How lines that do not fit are broken or truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineBreakMode {
    /// Wrap at word boundaries.
    WordWrap,
    /// Wrap at character boundaries.
    CharWrap,
    /// Cut off without an ellipsis.
    Clipping,
    /// Ellipsis at the start of the line.
    TruncatingHead,
    /// Ellipsis at the end of the line.
    #[default]
    TruncatingTail,
    /// Ellipsis in the middle of the line.
    TruncatingMiddle,
}
