//! `web.xml` generation for EJB web-service endpoints.

use crate::domain::{Deployment, DescriptorConfig, Document, Endpoint, SecurityConstraintEntry};
use crate::ports::SecurityRolesHandler;

/// File name of the generic web-app descriptor.
pub const WEB_XML: &str = "web.xml";

const ANY_ROLE: &str = "*";

/// Derive the security constraint for an endpoint, if its web context asks for one.
///
/// A constraint exists when the endpoint declares an auth method or a
/// transport guarantee. `GET` is protected only with secure WSDL access;
/// `POST` always is.
pub fn security_constraint(endpoint: &Endpoint) -> Option<SecurityConstraintEntry> {
    let auth_method = endpoint.auth_method();
    let transport_guarantee = endpoint.transport_guarantee();
    if auth_method.is_none() && transport_guarantee.is_none() {
        return None;
    }

    let mut http_methods = Vec::with_capacity(2);
    if endpoint.secure_wsdl_access() {
        http_methods.push("GET");
    }
    http_methods.push("POST");

    Some(SecurityConstraintEntry {
        resource_name: endpoint.short_name.to_string(),
        url_pattern: endpoint.url_pattern.clone(),
        http_methods,
        roles: auth_method.map(|_| vec![ANY_ROLE.to_string()]),
        transport_guarantee: transport_guarantee.map(str::to_string),
    })
}

/// The descriptor-wide login method: the first declared auth method in endpoint order.
pub fn login_method(endpoints: &[Endpoint]) -> Option<&str> {
    endpoints.iter().find_map(Endpoint::auth_method)
}

/// Build the `<web-app>` descriptor for a deployment.
pub fn build(
    deployment: &Deployment,
    config: &DescriptorConfig,
    roles: &dyn SecurityRolesHandler,
) -> Document {
    let mut document = Document::new("web-app");
    let web_app = document.root_mut();

    for endpoint in &deployment.endpoints {
        web_app
            .add_element("servlet")
            .add_text_element("servlet-name", endpoint.short_name.as_str())
            .add_text_element("servlet-class", &endpoint.target_bean);
    }

    for endpoint in &deployment.endpoints {
        web_app
            .add_element("servlet-mapping")
            .add_text_element("servlet-name", endpoint.short_name.as_str())
            .add_text_element("url-pattern", &endpoint.url_pattern);
    }

    // Set once: later endpoints never override the first declared auth method.
    let mut auth_method: Option<&str> = None;
    for endpoint in &deployment.endpoints {
        let Some(constraint) = security_constraint(endpoint) else {
            continue;
        };
        if auth_method.is_none() {
            auth_method = endpoint.auth_method();
        }
        constraint.append_to(web_app);
    }

    if let Some(method) = auth_method {
        web_app
            .add_element("login-config")
            .add_text_element("auth-method", method)
            .add_text_element("realm-name", &config.realm_name);

        roles.add_security_roles(web_app, deployment);
    }

    document
}
