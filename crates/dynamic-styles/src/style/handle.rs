//! Read access to a style inside a stylesheet.

use std::fmt;

use super::{FontDescriptor, ParagraphStyle, ResolvedStyle, StyleAttributes, DEFAULT_SIZE};
use crate::resolve::{Lineage, cascade, flatten, scale_size};
use crate::stylesheet::{StyleGraph, StyleId, Stylesheet};
use crate::types::{FontWeight, TextAlignment};

/// A named style borrowed from its [`Stylesheet`].
///
/// Every accessor returns the *resolved* value: the style's own value if it
/// sets one, otherwise the nearest ancestor's, otherwise the root default.
/// Reads are pure; calling an accessor twice gives the same answer.
///
/// | attribute | root default |
/// |---|---|
/// | family, face | `None` (platform default) |
/// | weight | [`FontWeight::REGULAR`] |
/// | size | [`DEFAULT_SIZE`] (17) |
/// | should_scale | `false` |
/// | line / paragraph spacing | `0.0` |
/// | minimum / maximum line height | `None` |
/// | alignment | `None` (platform-natural) |
///
/// # Example
///
/// ```
/// use dynamic_styles::prelude::*;
///
/// let sheet = Stylesheet::from_json_str(
///     r#"{"Base": {"size": 16, "family": "Sans"},
///         "Bold": {"parent": "Base", "weight": 0.8}}"#,
/// )?;
///
/// let bold = sheet.style("Bold").unwrap();
/// assert_eq!(bold.family(), Some("Sans"));
/// assert_eq!(bold.size(), 16.0);
/// assert_eq!(bold.weight().value(), 0.8);
/// # Ok::<(), dynamic_styles::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct Style<'s> {
    sheet: &'s Stylesheet,
    id: StyleId,
}

impl<'s> Style<'s> {
    pub(crate) fn new(sheet: &'s Stylesheet, id: StyleId) -> Self {
        Self { sheet, id }
    }

    fn graph(&self) -> &'s StyleGraph {
        self.sheet.graph()
    }

    fn cascade<T>(&self, get: impl Fn(&'s StyleAttributes) -> Option<T>) -> Option<T> {
        cascade(self.graph(), self.id, get)
    }

    /// The style's name.
    pub fn name(&self) -> &'s str {
        &self.graph().node(self.id).name
    }

    /// The parent name as declared, even if it did not resolve.
    pub fn parent_name(&self) -> Option<&'s str> {
        self.graph().node(self.id).parent_name.as_deref()
    }

    /// The parent style, if the declared parent exists.
    pub fn parent(&self) -> Option<Style<'s>> {
        self.graph()
            .node(self.id)
            .parent
            .map(|id| Style::new(self.sheet, id))
    }

    /// The attributes this style sets itself.
    pub fn attributes(&self) -> &'s StyleAttributes {
        &self.graph().node(self.id).attributes
    }

    /// Ancestors of this style, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = Style<'s>> + use<'s> {
        let sheet = self.sheet;
        Lineage::ancestors(sheet.graph(), self.id).map(move |id| Style::new(sheet, id))
    }

    /// The top of this style's parent chain, or the style itself.
    pub fn root(&self) -> Style<'s> {
        self.ancestors().last().unwrap_or(*self)
    }

    /// Whether following parent links leads back to this style.
    ///
    /// A loaded stylesheet has already rejected cycles, so this is always
    /// `false` here; it is exposed for symmetry with load-time validation.
    pub fn is_parent_cyclical(&self) -> bool {
        self.graph().is_parent_cyclical(self.id)
    }

    // === Font ===

    /// Resolved font family; `None` means the platform default family.
    pub fn family(&self) -> Option<&'s str> {
        self.cascade(|a| a.family.as_deref())
    }

    /// Resolved font face; `None` means the family's default face.
    pub fn face(&self) -> Option<&'s str> {
        self.cascade(|a| a.face.as_deref())
    }

    /// Resolved font weight.
    pub fn weight(&self) -> FontWeight {
        self.cascade(|a| a.weight).unwrap_or(FontWeight::REGULAR)
    }

    /// Resolved raw point size, before scaling.
    pub fn size(&self) -> f32 {
        self.cascade(|a| a.size).unwrap_or(DEFAULT_SIZE)
    }

    /// Resolved scaling flag.
    pub fn should_scale(&self) -> bool {
        self.cascade(|a| a.should_scale).unwrap_or(false)
    }

    /// Point size after dynamic scaling.
    ///
    /// Reads the stylesheet's reference size provider, so the result tracks
    /// the platform text-size setting when [`should_scale`](Self::should_scale)
    /// is on.
    pub fn scaled_size(&self) -> f32 {
        let size = self.size();
        if self.should_scale() {
            scale_size(size, self.sheet.reference_size().reference_point_size())
        } else {
            size
        }
    }

    // === Paragraph ===

    /// Resolved line spacing.
    pub fn line_spacing(&self) -> f32 {
        self.cascade(|a| a.line_spacing).unwrap_or(0.0)
    }

    /// Resolved spacing after paragraphs.
    pub fn paragraph_spacing(&self) -> f32 {
        self.cascade(|a| a.paragraph_spacing).unwrap_or(0.0)
    }

    /// Resolved spacing before paragraphs.
    pub fn paragraph_spacing_before(&self) -> f32 {
        self.cascade(|a| a.paragraph_spacing_before).unwrap_or(0.0)
    }

    /// Resolved minimum line height.
    pub fn minimum_line_height(&self) -> Option<f32> {
        self.cascade(|a| a.minimum_line_height)
    }

    /// Resolved maximum line height.
    pub fn maximum_line_height(&self) -> Option<f32> {
        self.cascade(|a| a.maximum_line_height)
    }

    /// Resolved alignment; `None` means platform-natural alignment.
    pub fn alignment(&self) -> Option<TextAlignment> {
        self.cascade(|a| a.alignment)
    }

    // === Materialized values ===

    /// Resolve every attribute at once.
    ///
    /// The result is memoized in the stylesheet.
    pub fn resolve(&self) -> ResolvedStyle {
        self.sheet.cache().get_or_insert_with(self.id, || {
            ResolvedStyle::from_attributes(flatten(self.graph(), self.id))
        })
    }

    /// The font this style asks for, at the scaled size.
    pub fn font_descriptor(&self) -> FontDescriptor {
        self.resolve().font_descriptor(self.sheet.reference_size())
    }

    /// The paragraph layout this style asks for.
    pub fn paragraph_style(&self) -> ParagraphStyle {
        self.resolve().paragraph_style()
    }
}

impl PartialEq for Style<'_> {
    /// Identity: the same node of the same sheet.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.sheet, other.sheet) && self.id == other.id
    }
}

impl Eq for Style<'_> {}

impl fmt::Debug for Style<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Style")
            .field("name", &self.name())
            .field("parent", &self.parent_name())
            .field("attributes", self.attributes())
            .finish()
    }
}
