//! Logging targets.
//!
//! The crate reports through the `tracing` crate and never installs a
//! subscriber itself. Load-time degradations in lenient mode are emitted as
//! `warn` events, so an application that wants to surface authoring mistakes
//! only needs a subscriber listening on these targets:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("dynamic_styles=warn")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Document decoding and attribute interpretation.
    pub const DOCUMENT: &str = "dynamic_styles::document";
    /// Graph linking and validation.
    pub const STYLESHEET: &str = "dynamic_styles::stylesheet";
    /// Document lookup on disk.
    pub const LOADER: &str = "dynamic_styles::loader";
    /// Font availability checks.
    pub const FONTS: &str = "dynamic_styles::fonts";
}
