//! Font availability checks.
//!
//! A stylesheet only describes fonts; whether a family and face actually
//! exist is a property of the platform. [`Stylesheet::verify_fonts`] asks a
//! [`FontCatalog`] about every style and reports the ones whose font cannot
//! be found. The check is diagnostic: loading never depends on it.

use std::collections::HashMap;

use crate::logging::targets;
use crate::style::FontDescriptor;
use crate::stylesheet::Stylesheet;

/// The platform's installed fonts.
pub trait FontCatalog {
    /// Whether the descriptor's family and face can be resolved.
    fn contains(&self, descriptor: &FontDescriptor) -> bool;

    /// Face names installed for a family. Empty for an unknown family.
    fn faces_in_family(&self, family: &str) -> Vec<String>;
}

/// An in-memory catalog of families and their faces.
///
/// ```
/// use dynamic_styles::prelude::*;
///
/// let catalog = StaticFontCatalog::new()
///     .with_family("Sans", ["Regular", "Bold"]);
/// let sheet = Stylesheet::from_json_str(r#"{"Title": {"family": "Sans", "face": "Black"}}"#)?;
///
/// let missing = sheet.verify_fonts(&catalog);
/// assert_eq!(missing.len(), 1);
/// assert_eq!(missing[0].available_faces, ["Regular", "Bold"]);
/// # Ok::<(), dynamic_styles::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticFontCatalog {
    families: HashMap<String, Vec<String>>,
}

impl StaticFontCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a family with its faces, returning the updated catalog.
    pub fn with_family<I, S>(mut self, family: impl Into<String>, faces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_family(family, faces);
        self
    }

    /// Add a family with its faces. Faces already listed are kept once.
    pub fn add_family<I, S>(&mut self, family: impl Into<String>, faces: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.families.entry(family.into()).or_default();
        for face in faces {
            let face = face.into();
            if !entry.contains(&face) {
                entry.push(face);
            }
        }
    }
}

impl FontCatalog for StaticFontCatalog {
    fn contains(&self, descriptor: &FontDescriptor) -> bool {
        let Some(family) = &descriptor.family else {
            return true;
        };
        match (self.families.get(family), &descriptor.face) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(faces), Some(face)) => faces.contains(face),
        }
    }

    fn faces_in_family(&self, family: &str) -> Vec<String> {
        self.families.get(family).cloned().unwrap_or_default()
    }
}

/// A style whose font the catalog could not resolve.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingFont {
    /// Name of the style.
    pub style: String,
    /// The font the style asked for.
    pub descriptor: FontDescriptor,
    /// Faces the catalog does have for the requested family.
    pub available_faces: Vec<String>,
}

impl Stylesheet {
    /// Report every style whose font is not in `catalog`.
    ///
    /// Styles without a family use the system font and are skipped.
    pub fn verify_fonts(&self, catalog: &impl FontCatalog) -> Vec<MissingFont> {
        let mut missing = Vec::new();

        for style in self.iter() {
            let descriptor = style.font_descriptor();
            let Some(family) = descriptor.family.as_deref() else {
                continue;
            };
            if catalog.contains(&descriptor) {
                continue;
            }

            let available_faces = catalog.faces_in_family(family);
            tracing::warn!(
                target: targets::FONTS,
                style = style.name(),
                family,
                face = descriptor.face.as_deref().unwrap_or_default(),
                "font not available; faces in family: {:?}",
                available_faces
            );

            missing.push(MissingFont {
                style: style.name().to_string(),
                descriptor,
                available_faces,
            });
        }

        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StaticFontCatalog {
        StaticFontCatalog::new()
            .with_family("Sans", ["Regular", "Bold"])
            .with_family("Serif", ["Italic"])
    }

    #[test]
    fn catalog_lookup() {
        let catalog = catalog();
        let descriptor = |family: Option<&str>, face: Option<&str>| FontDescriptor {
            family: family.map(str::to_string),
            face: face.map(str::to_string),
            weight: Default::default(),
            point_size: 12.0,
        };

        assert!(catalog.contains(&descriptor(Some("Sans"), Some("Bold"))));
        assert!(catalog.contains(&descriptor(Some("Sans"), None)));
        assert!(catalog.contains(&descriptor(None, Some("Anything"))));
        assert!(!catalog.contains(&descriptor(Some("Sans"), Some("Light"))));
        assert!(!catalog.contains(&descriptor(Some("Mono"), None)));
        assert!(catalog.faces_in_family("Mono").is_empty());
    }

    #[test]
    fn add_family_merges_faces() {
        let mut catalog = catalog();
        catalog.add_family("Serif", ["Italic", "Regular"]);
        assert_eq!(catalog.faces_in_family("Serif"), ["Italic", "Regular"]);
    }

    #[test]
    fn verify_reports_missing_inherited_fonts() {
        let sheet = Stylesheet::from_json_str(
            r#"{
                "System": {"size": 15},
                "Body": {"family": "Sans"},
                "Strong": {"parent": "Body", "face": "Bold"},
                "Light": {"parent": "Body", "face": "Light"},
                "Code": {"family": "Mono"}
            }"#,
        )
        .unwrap();

        let missing = sheet.verify_fonts(&catalog());
        let names: Vec<_> = missing.iter().map(|m| m.style.as_str()).collect();
        assert_eq!(names, ["Light", "Code"]);

        assert_eq!(missing[0].descriptor.family.as_deref(), Some("Sans"));
        assert_eq!(missing[0].available_faces, ["Regular", "Bold"]);
        assert!(missing[1].available_faces.is_empty());
    }
}
