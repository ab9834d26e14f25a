//! Registry document driver
//!
//! Selects the locally defined attributes of a convention set, renders one
//! section per root namespace and writes the finished document.

use crate::error::RenderError;
use crate::grouping::{group_by_root_namespace, local_attributes, sorted_keys};
use crate::table::render_root_namespace;
use semdoc_core::{MarkdownOptions, SemanticConventionSet};
use std::fs::Permissions;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Renders the attribute registry of a convention set
///
/// Holds no mutable state; per-table state lives only for the duration of
/// each table.
#[derive(Debug, Clone, Copy)]
pub struct RegistryRenderer<'a> {
    semconvset: &'a SemanticConventionSet,
    options: &'a MarkdownOptions,
}

impl<'a> RegistryRenderer<'a> {
    pub fn new(semconvset: &'a SemanticConventionSet, options: &'a MarkdownOptions) -> Self {
        Self { semconvset, options }
    }

    /// Render the full registry document
    pub fn render(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("# {}\n\n", self.options.title));

        let attributes = local_attributes(self.semconvset);
        let by_root = group_by_root_namespace(attributes);

        for root_namespace in sorted_keys(&by_root) {
            match by_root.get(root_namespace) {
                Some(group) if !group.is_empty() => {
                    render_root_namespace(root_namespace, group, self.options, &mut output);
                }
                _ => {}
            }
        }

        tracing::debug!(
            root_namespaces = by_root.len(),
            bytes = output.len(),
            "rendered attribute registry"
        );

        output
    }

    /// Render and write the registry to `path`, replacing any existing file
    pub fn render_registry(&self, path: &Path) -> Result<(), RenderError> {
        write_document(path, &self.render())
    }

    /// Whether the file at `path` already holds the current rendering
    ///
    /// A missing file, or one that is not valid UTF-8, is out of date.
    pub fn is_up_to_date(&self, path: &Path) -> Result<bool, RenderError> {
        match std::fs::read(path) {
            Ok(existing) => Ok(existing == self.render().as_bytes()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(RenderError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Write `contents` to `path` as UTF-8, all or nothing
///
/// The document goes to a temporary file next to `path` which then replaces
/// the target, so readers never observe a partial file. An existing target
/// keeps its permissions; a new one gets the usual `0644`.
pub fn write_document(path: &Path, contents: &str) -> Result<(), RenderError> {
    let write_error = |source: std::io::Error| RenderError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(contents.as_bytes()).map_err(write_error)?;
    if let Some(permissions) = target_permissions(path) {
        file.as_file().set_permissions(permissions).map_err(write_error)?;
    }
    file.persist(path).map_err(|e| write_error(e.error))?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "registry written");
    Ok(())
}

/// Permissions the written document should end up with
///
/// Temporary files are created owner-only, which would otherwise leak onto
/// the target.
fn target_permissions(path: &Path) -> Option<Permissions> {
    std::fs::metadata(path)
        .map(|metadata| metadata.permissions())
        .ok()
        .or_else(new_file_permissions)
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}
