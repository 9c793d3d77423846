//! Named text styles with parent inheritance.
//!
//! A stylesheet is a document mapping style names to records of text
//! attributes. Each style may name a parent, and any attribute a style
//! leaves unset is taken from the nearest ancestor that sets it, falling
//! back to a fixed root default. This crate provides:
//!
//! - **Documents**: decode JSON or TOML (or any serde format) into records
//! - **Validation**: parent links are resolved by name and cyclical parent
//!   graphs are rejected before a sheet is handed out
//! - **Cascading**: per-attribute accessors that walk the parent chain
//! - **Dynamic scaling**: sizes that follow the platform's body text size
//! - **Loading**: find named documents on configurable search paths
//!
//! # Example
//!
//! ```
//! use dynamic_styles::prelude::*;
//!
//! let sheet = Stylesheet::from_json_str(r#"{
//!     "Base": {"size": 16, "family": "Sans"},
//!     "Bold": {"parent": "Base", "weight": 0.8}
//! }"#)?;
//!
//! let bold = sheet.style("Bold").unwrap();
//! assert_eq!(bold.family(), Some("Sans"));
//! assert_eq!(bold.size(), 16.0);
//! assert_eq!(bold.weight(), FontWeight::new(0.8));
//! # Ok::<(), Error>(())
//! ```

pub mod document;
pub mod fonts;
pub mod loader;
pub mod logging;
pub mod resolve;
pub mod style;
pub mod stylesheet;
pub mod types;

mod error;

pub use error::{Error, Result};
pub use stylesheet::Stylesheet;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::document::{DocumentFormat, StyleDocument, StyleRecord};
    pub use crate::fonts::{FontCatalog, MissingFont, StaticFontCatalog};
    pub use crate::loader::{DocumentSource, StylesheetLoader};
    pub use crate::resolve::{FixedReferenceSize, ReferenceSizeProvider};
    pub use crate::style::{
        FontDescriptor, ParagraphStyle, ResolvedStyle, Style, StyleAttributes, StyleBuilder,
        StyleDefinition,
    };
    pub use crate::stylesheet::{LoadOptions, Strictness, Stylesheet};
    pub use crate::types::{FontWeight, LineBreakMode, TextAlignment};
    pub use crate::{Error, Result};
}
