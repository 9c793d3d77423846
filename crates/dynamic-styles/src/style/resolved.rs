//! Resolved styles with every attribute cascaded.

use crate::resolve::{ReferenceSizeProvider, scale_size};
use crate::style::StyleAttributes;
use crate::types::{FontWeight, LineBreakMode, TextAlignment};

/// Root default for the raw point size.
pub const DEFAULT_SIZE: f32 = 17.0;

/// A style with every attribute resolved through its parent chain.
///
/// This is an owned value: a rendering layer can hold on to it without
/// walking the parent chain again. Absent values mean "use the platform
/// default" and are left for the consumer to fill in.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    // === Font ===
    /// Font family, or `None` for the platform's system font.
    pub family: Option<String>,
    /// Font face, or `None` for the family's default face.
    pub face: Option<String>,
    /// Font weight.
    pub weight: FontWeight,
    /// Raw point size before scaling.
    pub size: f32,
    /// Whether the size follows the platform text-size preference.
    pub should_scale: bool,

    // === Paragraph ===
    /// Extra space between lines.
    pub line_spacing: f32,
    /// Space after each paragraph.
    pub paragraph_spacing: f32,
    /// Space before each paragraph.
    pub paragraph_spacing_before: f32,
    /// Minimum line height, if clamped.
    pub minimum_line_height: Option<f32>,
    /// Maximum line height, if clamped.
    pub maximum_line_height: Option<f32>,
    /// Alignment, or `None` for platform-natural alignment.
    pub alignment: Option<TextAlignment>,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            family: None,
            face: None,
            weight: FontWeight::REGULAR,
            size: DEFAULT_SIZE,
            should_scale: false,
            line_spacing: 0.0,
            paragraph_spacing: 0.0,
            paragraph_spacing_before: 0.0,
            minimum_line_height: None,
            maximum_line_height: None,
            alignment: None,
        }
    }
}

impl ResolvedStyle {
    /// Fill root defaults into a flattened set of attributes.
    pub fn from_attributes(attrs: StyleAttributes) -> Self {
        let defaults = Self::default();
        Self {
            family: attrs.family,
            face: attrs.face,
            weight: attrs.weight.unwrap_or(defaults.weight),
            size: attrs.size.unwrap_or(defaults.size),
            should_scale: attrs.should_scale.unwrap_or(defaults.should_scale),
            line_spacing: attrs.line_spacing.unwrap_or(defaults.line_spacing),
            paragraph_spacing: attrs.paragraph_spacing.unwrap_or(defaults.paragraph_spacing),
            paragraph_spacing_before: attrs
                .paragraph_spacing_before
                .unwrap_or(defaults.paragraph_spacing_before),
            minimum_line_height: attrs.minimum_line_height,
            maximum_line_height: attrs.maximum_line_height,
            alignment: attrs.alignment,
        }
    }

    /// The point size after dynamic scaling.
    pub fn scaled_size(&self, reference: &dyn ReferenceSizeProvider) -> f32 {
        if self.should_scale {
            scale_size(self.size, reference.reference_point_size())
        } else {
            self.size
        }
    }

    /// The font this style asks for.
    pub fn font_descriptor(&self, reference: &dyn ReferenceSizeProvider) -> FontDescriptor {
        FontDescriptor {
            family: self.family.clone(),
            face: self.face.clone(),
            weight: self.weight,
            point_size: self.scaled_size(reference),
        }
    }

    /// The paragraph layout this style asks for.
    pub fn paragraph_style(&self) -> ParagraphStyle {
        ParagraphStyle {
            line_spacing: self.line_spacing,
            paragraph_spacing: self.paragraph_spacing,
            paragraph_spacing_before: self.paragraph_spacing_before,
            minimum_line_height: self.minimum_line_height,
            maximum_line_height: self.maximum_line_height,
            alignment: self.alignment,
            line_break_mode: LineBreakMode::TruncatingTail,
        }
    }
}

/// A platform-independent font request.
///
/// Turning this into a concrete font object is the job of the platform
/// layer. When `family` is `None` the request is for the system font at the
/// given weight and size, and `face` is only a hint.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family, or `None` for the system font.
    pub family: Option<String>,
    /// Font face.
    pub face: Option<String>,
    /// Font weight.
    pub weight: FontWeight,
    /// Point size, already scaled.
    pub point_size: f32,
}

impl FontDescriptor {
    /// Whether this asks for the platform system font.
    pub fn is_system_font(&self) -> bool {
        self.family.is_none()
    }
}

/// Paragraph layout attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    /// Extra space between lines.
    pub line_spacing: f32,
    /// Space after each paragraph.
    pub paragraph_spacing: f32,
    /// Space before each paragraph.
    pub paragraph_spacing_before: f32,
    /// Minimum line height.
    pub minimum_line_height: Option<f32>,
    /// Maximum line height.
    pub maximum_line_height: Option<f32>,
    /// Alignment, or `None` for platform-natural alignment.
    pub alignment: Option<TextAlignment>,
    /// How overlong lines are cut.
    pub line_break_mode: LineBreakMode,
}
