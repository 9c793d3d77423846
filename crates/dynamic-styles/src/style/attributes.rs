//! Local attribute overrides of a single style.

use crate::types::{FontWeight, TextAlignment};

/// The attributes a style sets itself.
///
/// Every field is optional. An unset field is resolved through the parent
/// chain when the style is read; see [`Style`](crate::style::Style).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleAttributes {
    // === Font ===
    /// Font family name.
    pub family: Option<String>,
    /// Font face name within the family.
    pub face: Option<String>,
    /// Font weight.
    pub weight: Option<FontWeight>,
    /// Raw point size, before dynamic scaling.
    pub size: Option<f32>,
    /// Whether the size follows the platform text-size preference.
    pub should_scale: Option<bool>,

    // === Paragraph ===
    /// Extra space between lines.
    pub line_spacing: Option<f32>,
    /// Space after each paragraph.
    pub paragraph_spacing: Option<f32>,
    /// Space before each paragraph.
    pub paragraph_spacing_before: Option<f32>,
    /// Absolute minimum line height. Not scaled.
    pub minimum_line_height: Option<f32>,
    /// Absolute maximum line height. Not scaled.
    pub maximum_line_height: Option<f32>,
    /// Horizontal alignment.
    pub alignment: Option<TextAlignment>,
}

/// Names of the attributes as they appear in a style document.
pub const ATTRIBUTE_KEYS: &[&str] = &[
    "family",
    "face",
    "weight",
    "size",
    "shouldScale",
    "lineSpacing",
    "paragraphSpacing",
    "paragraphSpacingBefore",
    "minimumLineHeight",
    "maximumLineHeight",
    "alignment",
];

impl StyleAttributes {
    /// Create an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a document key names an attribute.
    pub fn is_attribute_key(key: &str) -> bool {
        ATTRIBUTE_KEYS.contains(&key)
    }

    /// Whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Number of attributes that are set.
    pub fn count(&self) -> usize {
        let mut count = 0;
        macro_rules! count_set {
            ($($attr:ident),+ $(,)?) => {
                $(
                    if self.$attr.is_some() {
                        count += 1;
                    }
                )+
            };
        }

        count_set!(
            family, face, weight, size, should_scale,
            line_spacing, paragraph_spacing, paragraph_spacing_before,
            minimum_line_height, maximum_line_height, alignment,
        );
        count
    }

    /// Overlay another set of overrides onto this one.
    ///
    /// Only attributes set in `other` are copied.
    pub fn merge(&mut self, other: &StyleAttributes) {
        macro_rules! merge_if_set {
            ($($attr:ident),+ $(,)?) => {
                $(
                    if other.$attr.is_some() {
                        self.$attr = other.$attr.clone();
                    }
                )+
            };
        }

        merge_if_set!(
            // Font
            family, face, weight, size, should_scale,
            // Paragraph
            line_spacing, paragraph_spacing, paragraph_spacing_before,
            minimum_line_height, maximum_line_height, alignment,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_default() {
        let attrs = StyleAttributes::new();
        assert!(attrs.is_empty());
        assert_eq!(attrs.count(), 0);
        assert!(attrs.family.is_none());
    }

    #[test]
    fn attributes_merge() {
        let mut base = StyleAttributes::new();
        base.size = Some(17.0);
        base.family = Some("Sans".to_string());

        let mut overlay = StyleAttributes::new();
        overlay.size = Some(12.0);
        overlay.alignment = Some(TextAlignment::Center);

        base.merge(&overlay);

        assert_eq!(base.size, Some(12.0));
        assert_eq!(base.family.as_deref(), Some("Sans"));
        assert_eq!(base.alignment, Some(TextAlignment::Center));
        assert_eq!(base.count(), 3);
    }

    #[test]
    fn attribute_keys() {
        assert!(StyleAttributes::is_attribute_key("shouldScale"));
        assert!(StyleAttributes::is_attribute_key("paragraphSpacingBefore"));
        assert!(!StyleAttributes::is_attribute_key("parent"));
        assert!(!StyleAttributes::is_attribute_key("color"));
    }
}
