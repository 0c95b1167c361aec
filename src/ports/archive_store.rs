use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Directory holding the descriptors inside an archive.
pub const WEB_INF: &str = "WEB-INF";

/// Storage for generated web archives.
pub trait ArchiveStore {
    /// Allocate a uniquely named archive directory (with its `WEB-INF`
    /// subdirectory) for the given deployment name and return its path.
    fn create_archive(&self, deployment_name: &str) -> Result<PathBuf, AppError>;

    /// Write a descriptor file into the archive's `WEB-INF` directory.
    fn write_descriptor(
        &self,
        archive: &Path,
        file_name: &str,
        contents: &[u8],
    ) -> Result<(), AppError>;
}
