pub mod archive_filesystem;
pub mod deployment_manifest;
pub mod xml_writer;

pub use archive_filesystem::FilesystemArchiveStore;
pub use deployment_manifest::{DeploymentManifest, ManifestFormat, load_manifest};
