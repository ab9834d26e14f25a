//! Attribute registry rendering
//!
//! This crate handles:
//! - Filtering and grouping attributes by root namespace and namespace
//! - Rendering one Markdown table per namespace
//! - Row-level footnotes and per-enum value appendices
//! - Writing the finished document atomically

pub mod context;
pub mod enums;
pub mod error;
pub mod grouping;
pub mod renderer;
pub mod row;
pub mod table;

mod format;

pub use context::{EnumEntry, RenderContext};
pub use error::RenderError;
pub use renderer::{write_document, RegistryRenderer};
pub use row::{render_attribute_row, stability_message};
pub use table::render_root_namespace;
