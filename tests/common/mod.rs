//! Shared testing utilities for wsgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SECURED_MANIFEST: &str = r#"
name = "ejb/hello.jar"
type = "JAXWS_EJB3"
context_root = "/ws/ejb3"

[properties]
security-domain = "cts"

[[endpoints]]
short_name = "Open"
target_bean = "org.example.OpenBean"
url_pattern = "/open"

[[endpoints]]
short_name = "Basic"
target_bean = "org.example.BasicBean"
url_pattern = "/basic"

[endpoints.web_context]
auth_method = "BASIC"
secure_wsdl_access = true

[[endpoints]]
short_name = "Digest"
target_bean = "org.example.DigestBean"
url_pattern = "/digest"

[endpoints.web_context]
auth_method = "DIGEST"
transport_guarantee = "CONFIDENTIAL"

[[beans]]
name = "BasicBean"
roles_allowed = ["friend"]
"#;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Server temp directory configured for this context.
    pub fn server_temp_dir(&self) -> PathBuf {
        self.root.path().join("server-tmp")
    }

    /// Directory receiving generated archives.
    pub fn deploy_dir(&self) -> PathBuf {
        self.server_temp_dir().join("deploy")
    }

    /// Build a command for invoking the compiled `wsgen` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("wsgen").expect("Failed to locate wsgen binary");
        cmd.current_dir(&self.work_dir)
            .env("WSGEN_SERVER_TEMP_DIR", self.server_temp_dir())
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the working directory.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Archives generated so far.
    pub fn archives(&self) -> Vec<PathBuf> {
        match fs::read_dir(self.deploy_dir()) {
            Ok(entries) => entries.map(|e| e.expect("read deploy entry").path()).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// The single generated archive.
    pub fn only_archive(&self) -> PathBuf {
        let archives = self.archives();
        assert_eq!(archives.len(), 1, "expected exactly one archive, found {:?}", archives);
        archives.into_iter().next().unwrap()
    }

    pub fn read_descriptor(&self, archive: &Path, file_name: &str) -> String {
        fs::read_to_string(archive.join("WEB-INF").join(file_name))
            .unwrap_or_else(|e| panic!("read {}: {}", file_name, e))
    }
}
