//! `jboss-web.xml` generation.

use crate::domain::{AppError, Deployment, DescriptorConfig, Document};

/// File name of the vendor descriptor.
pub const JBOSS_WEB_XML: &str = "jboss-web.xml";

/// Build the `<jboss-web>` descriptor.
///
/// The security domain is optional; the context root is required.
pub fn build(deployment: &Deployment, config: &DescriptorConfig) -> Result<Document, AppError> {
    let mut document = Document::new("jboss-web");
    let jboss_web = document.root_mut();

    if let Some(domain) = deployment.security_domain() {
        let qualified = format!("{}{}", config.security_domain_prefix, domain);
        jboss_web.add_text_element("security-domain", &qualified);
    }

    let context_root = deployment
        .context_root
        .as_deref()
        .ok_or_else(|| AppError::config_error("Cannot obtain context root"))?;
    jboss_web.add_text_element("context-root", context_root);

    Ok(document)
}
