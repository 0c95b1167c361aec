//! Deployment metadata consumed by descriptor generation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

use super::AppError;

/// Name of the deployment property carrying the security domain.
pub const SECURITY_DOMAIN_PROPERTY: &str = "security-domain";

/// A validated endpoint short name.
///
/// Guarantees:
/// - Non-empty
/// - No whitespace and no `/`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EndpointName(String);

impl EndpointName {
    pub fn new(value: &str) -> Result<Self, AppError> {
        if value.is_empty() || value.contains('/') || value.chars().any(char::is_whitespace) {
            return Err(AppError::InvalidEndpointName(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EndpointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EndpointName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EndpointName::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Component technology behind a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeploymentType {
    #[serde(rename = "JAXRPC_EJB21")]
    JaxRpcEjb21,
    #[serde(rename = "JAXWS_EJB3")]
    JaxWsEjb3,
    #[serde(rename = "JAXRPC_JSE")]
    JaxRpcJse,
    #[serde(rename = "JAXWS_JSE")]
    JaxWsJse,
}

impl DeploymentType {
    /// Bean model for EJB deployments, `None` for plain servlet endpoints.
    pub fn bean_model(self) -> Option<BeanModel> {
        match self {
            DeploymentType::JaxRpcEjb21 => Some(BeanModel::Ejb21),
            DeploymentType::JaxWsEjb3 => Some(BeanModel::Ejb3),
            DeploymentType::JaxRpcJse | DeploymentType::JaxWsJse => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeploymentType::JaxRpcEjb21 => "JAXRPC_EJB21",
            DeploymentType::JaxWsEjb3 => "JAXWS_EJB3",
            DeploymentType::JaxRpcJse => "JAXRPC_JSE",
            DeploymentType::JaxWsJse => "JAXWS_JSE",
        }
    }
}

impl fmt::Display for DeploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// EJB programming model, used to pick a security roles handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeanModel {
    /// EJB 2.1: roles come from the assembly descriptor.
    Ejb21,
    /// EJB 3: roles come from bean annotations.
    Ejb3,
}

/// Pre-resolved web context attributes of an endpoint's target bean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebContext {
    #[serde(default)]
    pub auth_method: Option<String>,
    #[serde(default)]
    pub transport_guarantee: Option<String>,
    #[serde(default)]
    pub secure_wsdl_access: bool,
}

impl WebContext {
    /// Declared auth method; empty values count as undeclared.
    pub fn auth_method(&self) -> Option<&str> {
        self.auth_method.as_deref().filter(|s| !s.is_empty())
    }

    /// Declared transport guarantee; empty values count as undeclared.
    pub fn transport_guarantee(&self) -> Option<&str> {
        self.transport_guarantee.as_deref().filter(|s| !s.is_empty())
    }
}

/// A web-service endpoint exposed by a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Endpoint {
    pub short_name: EndpointName,
    pub target_bean: String,
    pub url_pattern: String,
    #[serde(default)]
    pub web_context: Option<WebContext>,
}

impl Endpoint {
    pub fn new(short_name: EndpointName, target_bean: &str, url_pattern: &str) -> Self {
        Self {
            short_name,
            target_bean: target_bean.to_string(),
            url_pattern: url_pattern.to_string(),
            web_context: None,
        }
    }

    pub fn with_web_context(mut self, web_context: WebContext) -> Self {
        self.web_context = Some(web_context);
        self
    }

    pub fn auth_method(&self) -> Option<&str> {
        self.web_context.as_ref().and_then(WebContext::auth_method)
    }

    pub fn transport_guarantee(&self) -> Option<&str> {
        self.web_context.as_ref().and_then(WebContext::transport_guarantee)
    }

    pub fn secure_wsdl_access(&self) -> bool {
        self.web_context.as_ref().is_some_and(|ctx| ctx.secure_wsdl_access)
    }
}

/// Security annotations of a single EJB 3 bean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BeanSecurity {
    pub name: String,
    #[serde(default)]
    pub declared_roles: Vec<String>,
    #[serde(default)]
    pub roles_allowed: Vec<String>,
}

/// Security metadata for the deployment's beans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityMetadata {
    /// Roles from the EJB 2.1 assembly descriptor, in declaration order.
    pub assembly_roles: Vec<String>,
    /// Per-bean EJB 3 security annotations.
    pub beans: Vec<BeanSecurity>,
}

/// Deployment-wide information attached by the deployment pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentInfo {
    pub canonical_name: String,
    /// Location of the generated web archive, set after generation.
    pub webapp_url: Option<Url>,
}

impl DeploymentInfo {
    pub fn new(canonical_name: &str) -> Self {
        Self { canonical_name: canonical_name.to_string(), webapp_url: None }
    }
}

/// A web-service deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub deployment_type: DeploymentType,
    pub context_root: Option<String>,
    pub properties: BTreeMap<String, String>,
    pub endpoints: Vec<Endpoint>,
    pub security: SecurityMetadata,
    pub info: Option<DeploymentInfo>,
}

impl Deployment {
    pub fn new(deployment_type: DeploymentType) -> Self {
        Self {
            deployment_type,
            context_root: None,
            properties: BTreeMap::new(),
            endpoints: Vec::new(),
            security: SecurityMetadata::default(),
            info: None,
        }
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn security_domain(&self) -> Option<&str> {
        self.property(SECURITY_DOMAIN_PROPERTY)
    }

    /// The attached deployment info; its absence is an illegal state.
    pub fn info(&self) -> Result<&DeploymentInfo, AppError> {
        self.info
            .as_ref()
            .ok_or_else(|| AppError::IllegalState("Cannot obtain unified deployment info".into()))
    }

    pub fn info_mut(&mut self) -> Result<&mut DeploymentInfo, AppError> {
        self.info
            .as_mut()
            .ok_or_else(|| AppError::IllegalState("Cannot obtain unified deployment info".into()))
    }
}
