//! Semantic convention set and model loading
//!
//! Loads conventions from a JSON file or a directory of JSON files.

use crate::attribute::Attribute;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

/// A single semantic convention (a group of attributes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticConvention {
    /// Convention id (e.g. `registry.http`)
    pub id: String,

    /// Short description
    #[serde(default)]
    pub brief: String,

    /// Attributes in declaration order
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl SemanticConvention {
    pub fn new(id: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            id: id.into(),
            brief: String::new(),
            attributes,
        }
    }
}

/// On-disk layout of one model file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ModelFile {
    #[serde(default)]
    groups: Vec<SemanticConvention>,
}

/// All loaded conventions keyed by id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticConventionSet {
    pub models: BTreeMap<String, SemanticConvention>,
}

impl SemanticConventionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON file, or from every `*.json` file below a directory
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let mut set = Self::new();

        if path.is_dir() {
            let mut files = Vec::new();
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry.map_err(|e| {
                    ModelError::IoError(path.display().to_string(), e.to_string())
                })?;
                if entry.file_type().is_file()
                    && entry.path().extension().is_some_and(|ext| ext == "json")
                {
                    files.push(entry.into_path());
                }
            }

            tracing::debug!(dir = %path.display(), files = files.len(), "loading model directory");

            for file in files {
                set.load_file(&file)?;
            }
        } else {
            set.load_file(path)?;
        }

        Ok(set)
    }

    /// Parse a model document and add its conventions
    pub fn add_json(&mut self, json: &str) -> Result<(), ModelError> {
        let file: ModelFile = serde_json::from_str(json)
            .map_err(|e| ModelError::ParseError(e.to_string()))?;

        for convention in file.groups {
            self.add(convention)?;
        }

        Ok(())
    }

    /// Add a convention, rejecting duplicate ids
    pub fn add(&mut self, convention: SemanticConvention) -> Result<(), ModelError> {
        if self.models.contains_key(&convention.id) {
            return Err(ModelError::DuplicateConvention(convention.id));
        }

        self.models.insert(convention.id.clone(), convention);
        Ok(())
    }

    /// Every attribute of every convention
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.models.values().flat_map(|c| c.attributes.iter())
    }

    fn load_file(&mut self, path: &Path) -> Result<(), ModelError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ModelError::IoError(path.display().to_string(), e.to_string()))?;

        self.add_json(&contents).map_err(|e| match e {
            ModelError::ParseError(msg) => {
                ModelError::ParseError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }
}

/// Model loading errors
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Failed to read model file {0}: {1}")]
    IoError(String, String),

    #[error("Failed to parse model JSON: {0}")]
    ParseError(String),

    #[error("Duplicate semantic convention id: {0}")]
    DuplicateConvention(String),
}
