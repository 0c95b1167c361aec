use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, ServerConfig};
use crate::ports::{ArchiveStore, WEB_INF};

/// Filesystem-based archive store rooted at the server's deploy directory.
#[derive(Debug, Clone)]
pub struct FilesystemArchiveStore {
    deploy_dir: PathBuf,
}

impl FilesystemArchiveStore {
    /// Create an archive store writing below the given directory.
    pub fn new(deploy_dir: PathBuf) -> Self {
        Self { deploy_dir }
    }

    /// Create an archive store for the configured server layout.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.deploy_dir())
    }

    pub fn deploy_dir(&self) -> &Path {
        &self.deploy_dir
    }
}

impl ArchiveStore for FilesystemArchiveStore {
    fn create_archive(&self, deployment_name: &str) -> Result<PathBuf, AppError> {
        fs::create_dir_all(&self.deploy_dir)?;
        let deploy_dir = fs::canonicalize(&self.deploy_dir)?;

        // Reserve a unique name with a placeholder file, then replace it with the directory.
        let placeholder = tempfile::Builder::new()
            .prefix(deployment_name)
            .suffix(".war")
            .tempfile_in(&deploy_dir)?;
        let archive = placeholder.path().to_path_buf();
        placeholder.close()?;

        fs::create_dir_all(archive.join(WEB_INF))?;
        debug!(archive = %archive.display(), "Allocated archive directory");
        Ok(archive)
    }

    fn write_descriptor(
        &self,
        archive: &Path,
        file_name: &str,
        contents: &[u8],
    ) -> Result<(), AppError> {
        fs::write(archive.join(WEB_INF).join(file_name), contents)?;
        Ok(())
    }
}
