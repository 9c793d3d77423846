//! Styles: local attributes, definitions, resolved values and the
//! read handle into a stylesheet.

mod attributes;
mod builder;
mod handle;
mod resolved;

pub use attributes::{ATTRIBUTE_KEYS, StyleAttributes};
pub use builder::{StyleBuilder, StyleDefinition};
pub use handle::Style;
pub use resolved::{DEFAULT_SIZE, FontDescriptor, ParagraphStyle, ResolvedStyle};
