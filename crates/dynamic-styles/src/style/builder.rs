//! Programmatic style definitions.

use super::StyleAttributes;
use crate::types::{FontWeight, TextAlignment};

/// A style as declared: an optional parent name plus local overrides.
///
/// This is what a document record decodes to, before the owning stylesheet
/// links parents by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDefinition {
    /// Name of the style this one inherits from.
    pub parent: Option<String>,
    /// Attributes set by this style itself.
    pub attributes: StyleAttributes,
}

impl StyleDefinition {
    /// Create a definition from its parts.
    pub fn new(parent: Option<String>, attributes: StyleAttributes) -> Self {
        Self { parent, attributes }
    }
}

/// Builder for style definitions with a fluent API.
///
/// # Example
///
/// ```
/// use dynamic_styles::prelude::*;
///
/// let heading = StyleBuilder::new()
///     .parent("Body")
///     .size(28.0)
///     .weight(FontWeight::BOLD)
///     .alignment(TextAlignment::Center)
///     .build();
///
/// assert_eq!(heading.parent.as_deref(), Some("Body"));
/// assert_eq!(heading.attributes.size, Some(28.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleBuilder {
    definition: StyleDefinition,
}

impl StyleBuilder {
    /// Create a new style builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the final definition.
    pub fn build(self) -> StyleDefinition {
        self.definition
    }

    /// Inherit unset attributes from the named style.
    pub fn parent(mut self, name: impl Into<String>) -> Self {
        self.definition.parent = Some(name.into());
        self
    }

    // === Font ===

    /// Set the font family.
    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.definition.attributes.family = Some(family.into());
        self
    }

    /// Set the font face.
    pub fn face(mut self, face: impl Into<String>) -> Self {
        self.definition.attributes.face = Some(face.into());
        self
    }

    /// Set the font weight.
    pub fn weight(mut self, weight: impl Into<FontWeight>) -> Self {
        self.definition.attributes.weight = Some(weight.into());
        self
    }

    /// Set the raw point size.
    pub fn size(mut self, size: f32) -> Self {
        self.definition.attributes.size = Some(size);
        self
    }

    /// Set whether the size follows the platform text-size preference.
    pub fn should_scale(mut self, scale: bool) -> Self {
        self.definition.attributes.should_scale = Some(scale);
        self
    }

    // === Paragraph ===

    /// Set the spacing between lines.
    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.definition.attributes.line_spacing = Some(spacing);
        self
    }

    /// Set the spacing after paragraphs.
    pub fn paragraph_spacing(mut self, spacing: f32) -> Self {
        self.definition.attributes.paragraph_spacing = Some(spacing);
        self
    }

    /// Set the spacing before paragraphs.
    pub fn paragraph_spacing_before(mut self, spacing: f32) -> Self {
        self.definition.attributes.paragraph_spacing_before = Some(spacing);
        self
    }

    /// Set the minimum line height.
    pub fn minimum_line_height(mut self, height: f32) -> Self {
        self.definition.attributes.minimum_line_height = Some(height);
        self
    }

    /// Set the maximum line height.
    pub fn maximum_line_height(mut self, height: f32) -> Self {
        self.definition.attributes.maximum_line_height = Some(height);
        self
    }

    /// Set the text alignment.
    pub fn alignment(mut self, alignment: TextAlignment) -> Self {
        self.definition.attributes.alignment = Some(alignment);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chain() {
        let def = StyleBuilder::new()
            .family("Serif")
            .face("Italic")
            .size(14.0)
            .should_scale(true)
            .line_spacing(2.0)
            .build();

        assert!(def.parent.is_none());
        assert_eq!(def.attributes.family.as_deref(), Some("Serif"));
        assert_eq!(def.attributes.face.as_deref(), Some("Italic"));
        assert_eq!(def.attributes.should_scale, Some(true));
        assert_eq!(def.attributes.count(), 5);
    }

    #[test]
    fn builder_paragraph() {
        let def = StyleBuilder::new()
            .parent("Body")
            .paragraph_spacing(8.0)
            .paragraph_spacing_before(4.0)
            .minimum_line_height(20.0)
            .maximum_line_height(24.0)
            .build();

        assert_eq!(def.parent.as_deref(), Some("Body"));
        assert_eq!(def.attributes.paragraph_spacing, Some(8.0));
        assert_eq!(def.attributes.maximum_line_height, Some(24.0));
        assert!(def.attributes.alignment.is_none());
    }
}
