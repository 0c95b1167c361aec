//! Shared fixtures for unit tests.

mod memory_archive_store;

pub use memory_archive_store::MemoryArchiveStore;

use crate::domain::{Deployment, DeploymentInfo, DeploymentType, Endpoint, EndpointName, WebContext};

/// Unsecured endpoint whose bean class is `org.example.<name>Bean`.
pub fn endpoint(name: &str, url_pattern: &str) -> Endpoint {
    Endpoint::new(
        EndpointName::new(name).unwrap(),
        &format!("org.example.{}Bean", name),
        url_pattern,
    )
}

/// Endpoint carrying web context security metadata.
pub fn secured_endpoint(
    name: &str,
    url_pattern: &str,
    auth_method: Option<&str>,
    transport_guarantee: Option<&str>,
    secure_wsdl_access: bool,
) -> Endpoint {
    endpoint(name, url_pattern).with_web_context(WebContext {
        auth_method: auth_method.map(str::to_string),
        transport_guarantee: transport_guarantee.map(str::to_string),
        secure_wsdl_access,
    })
}

/// EJB 3 deployment `ejb/hello.jar` with context root `/ws`.
pub fn deployment_with(endpoints: Vec<Endpoint>) -> Deployment {
    let mut deployment = Deployment::new(DeploymentType::JaxWsEjb3);
    deployment.context_root = Some("/ws".to_string());
    deployment.endpoints = endpoints;
    deployment.info = Some(DeploymentInfo::new("ejb/hello.jar"));
    deployment
}
