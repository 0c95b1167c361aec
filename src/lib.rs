//! wsgen: Generate web-app deployment descriptors for EJB web-service endpoints.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

use adapters::{FilesystemArchiveStore, load_manifest};
use app::{
    AppContext,
    commands::{generate, hash, record},
};

pub use app::commands::generate::GeneratedArchive;
pub use domain::AppError;
pub use services::RecordFields;

// =============================================================================
// Generate Command API
// =============================================================================

/// Generate the web app for the deployment described by `manifest`.
///
/// Configuration is read from `config` when given, otherwise from
/// `wsgen.toml` in the current directory if present.
/// Returns `None` when the deployment has no EJB endpoints to expose.
pub fn generate(
    manifest: &Path,
    config: Option<&Path>,
) -> Result<Option<GeneratedArchive>, AppError> {
    let root = std::env::current_dir()?;
    generate_at(manifest, config, root)
}

/// Generate the web app, resolving relative paths against `root`.
pub fn generate_at(
    manifest: &Path,
    config: Option<&Path>,
    root: PathBuf,
) -> Result<Option<GeneratedArchive>, AppError> {
    let config = app::config::load_config(&root, config)?;
    let mut deployment = load_manifest(&root.join(manifest))?;

    let store = FilesystemArchiveStore::from_config(&config.server);
    let ctx = AppContext::new(store, config);
    generate::execute(&ctx, &mut deployment)
}

// =============================================================================
// Monitoring + Hashing APIs
// =============================================================================

/// Render a JSON monitoring record through the log recorder.
pub fn render_record(path: &Path, fields: RecordFields) -> Result<String, AppError> {
    record::execute(path, fields)
}

/// Compose the hash code of string fields.
pub fn hash_values<S: AsRef<str>>(values: &[S]) -> i32 {
    hash::execute(values)
}
