//! Attribute resolution: cascading, scaling and memoization.

mod cache;
mod cascade;
mod scale;

pub(crate) use cache::ResolvedCache;
pub(crate) use cascade::{Lineage, cascade, flatten};
pub use scale::{FixedReferenceSize, REFERENCE_SIZE, ReferenceSizeProvider, scale_size};
