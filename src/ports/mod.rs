mod archive_store;
mod record_processor;
mod security_roles;

pub use archive_store::{ArchiveStore, WEB_INF};
pub use record_processor::RecordProcessor;
pub use security_roles::SecurityRolesHandler;
