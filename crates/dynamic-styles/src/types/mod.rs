//! Attribute value types.

mod value;

pub use value::{FontWeight, LineBreakMode, TextAlignment};
