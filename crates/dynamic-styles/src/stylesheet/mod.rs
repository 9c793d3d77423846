//! Stylesheets: owning collections of linked, validated styles.

mod graph;
mod options;
mod sheet;

pub(crate) use graph::{StyleGraph, StyleId};
pub use options::{LoadOptions, Strictness};
pub use sheet::Stylesheet;
