//! Dynamic text scaling.
//!
//! A style with `shouldScale` set follows the platform's text-size
//! preference. The platform reports the point size it currently uses for body
//! text; sizes are scaled by the ratio between that and [`REFERENCE_SIZE`].

use std::fmt;

/// The normative body text size the platform size is compared against.
pub const REFERENCE_SIZE: f32 = 17.0;

/// Scale `size` by the ratio of `reference_point_size` to [`REFERENCE_SIZE`].
///
/// ```
/// use dynamic_styles::resolve::scale_size;
///
/// assert_eq!(scale_size(17.0, 17.0), 17.0);
/// assert!((scale_size(34.0, 20.0) - 40.0).abs() < 1e-4);
/// ```
pub fn scale_size(size: f32, reference_point_size: f32) -> f32 {
    size * (reference_point_size / REFERENCE_SIZE)
}

/// Source of the platform's current body text point size.
///
/// The value normally comes from an accessibility or text-size setting and
/// may change while the application runs; it is queried on every scaled
/// size read rather than captured at load time.
pub trait ReferenceSizeProvider: Send + Sync {
    /// The current body text point size.
    fn reference_point_size(&self) -> f32;
}

impl ReferenceSizeProvider for f32 {
    fn reference_point_size(&self) -> f32 {
        *self
    }
}

impl<F> ReferenceSizeProvider for F
where
    F: Fn() -> f32 + Send + Sync,
{
    fn reference_point_size(&self) -> f32 {
        self()
    }
}

/// A provider that always reports the same size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedReferenceSize(pub f32);

impl Default for FixedReferenceSize {
    /// Reports [`REFERENCE_SIZE`], which leaves sizes unchanged.
    fn default() -> Self {
        Self(REFERENCE_SIZE)
    }
}

impl ReferenceSizeProvider for FixedReferenceSize {
    fn reference_point_size(&self) -> f32 {
        self.0
    }
}

impl fmt::Debug for dyn ReferenceSizeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceSizeProvider")
            .field("reference_point_size", &self.reference_point_size())
            .finish()
    }
}
