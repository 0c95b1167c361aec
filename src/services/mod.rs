pub mod log_recorder;
pub mod security_roles;
pub mod vendor_descriptor;
pub mod web_descriptor;

pub use log_recorder::{LogRecorder, MONITORING_TARGET, RecordFields};
pub use security_roles::{AnnotatedBeanRoles, AssemblyDescriptorRoles, SecurityRolesHandlers};
