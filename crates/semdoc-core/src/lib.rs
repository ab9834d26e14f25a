//! semdoc core
//!
//! Attribute model, semantic convention sets and rendering configuration.
//! Consumed read-only by the registry renderer.

pub mod attribute;
pub mod config;
pub mod convention;

pub use attribute::{
    Attribute, AttributeType, AttributeValue, EnumAttributeType, EnumMember, StabilityLevel,
};
pub use config::{Config, ConfigError, MarkdownOptions, StabilitySnippets};
pub use convention::{ModelError, SemanticConvention, SemanticConventionSet};
