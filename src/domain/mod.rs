pub mod config;
pub mod deployment;
pub mod descriptor;
pub mod error;
pub mod hash_code;
pub mod record;

pub use config::{DescriptorConfig, GeneratorConfig, ServerConfig};
pub use deployment::{
    BeanModel, BeanSecurity, Deployment, DeploymentInfo, DeploymentType, Endpoint, EndpointName,
    SECURITY_DOMAIN_PROPERTY, SecurityMetadata, WebContext,
};
pub use descriptor::{Document, Element, SecurityConstraintEntry};
pub use error::AppError;
pub use record::{MessageType, Record};
