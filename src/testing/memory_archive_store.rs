use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{ArchiveStore, WEB_INF};

const MEMORY_ROOT: &str = "/memory";

#[derive(Debug, Default)]
struct State {
    archives: Vec<PathBuf>,
    files: HashMap<PathBuf, Vec<u8>>,
}

/// In-memory archive store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryArchiveStore {
    // Shared so a test keeps a handle after moving a clone into the context.
    state: Arc<Mutex<State>>,
    failing_file: Option<String>,
}

impl MemoryArchiveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes of `file_name` fail with a permission error.
    pub fn failing_on(file_name: &str) -> Self {
        Self { failing_file: Some(file_name.to_string()), ..Self::default() }
    }

    pub fn archive_count(&self) -> usize {
        self.state.lock().unwrap().archives.len()
    }

    pub fn file_count(&self) -> usize {
        self.state.lock().unwrap().files.len()
    }

    pub fn descriptor(&self, archive: &Path, file_name: &str) -> Option<String> {
        let state = self.state.lock().unwrap();
        let bytes = state.files.get(&archive.join(WEB_INF).join(file_name))?;
        Some(String::from_utf8(bytes.clone()).unwrap())
    }
}

impl ArchiveStore for MemoryArchiveStore {
    fn create_archive(&self, deployment_name: &str) -> Result<PathBuf, AppError> {
        let mut state = self.state.lock().unwrap();
        let archive = PathBuf::from(MEMORY_ROOT)
            .join(format!("{}{}.war", deployment_name, state.archives.len()));
        state.archives.push(archive.clone());
        Ok(archive)
    }

    fn write_descriptor(
        &self,
        archive: &Path,
        file_name: &str,
        contents: &[u8],
    ) -> Result<(), AppError> {
        if self.failing_file.as_deref() == Some(file_name) {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("cannot write {}", file_name),
            )));
        }
        let mut state = self.state.lock().unwrap();
        if !state.archives.iter().any(|a| a == archive) {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("archive not found: {}", archive.display()),
            )));
        }
        state.files.insert(archive.join(WEB_INF).join(file_name), contents.to_vec());
        Ok(())
    }
}
