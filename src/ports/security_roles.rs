use crate::domain::{Deployment, Element};

/// Populates `<security-role>` definitions of a web-app descriptor.
///
/// Implementations differ by bean model; the deployment's type decides which
/// one runs.
pub trait SecurityRolesHandler {
    fn add_security_roles(&self, web_app: &mut Element, deployment: &Deployment);
}
