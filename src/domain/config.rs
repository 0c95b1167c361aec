//! Generator configuration models.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Configuration loaded from `wsgen.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Server filesystem layout.
    #[serde(default)]
    pub server: ServerConfig,
    /// Descriptor content settings.
    #[serde(default)]
    pub descriptor: DescriptorConfig,
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.server.validate()?;
        self.descriptor.validate()?;
        Ok(())
    }
}

/// Server filesystem layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Server temp directory; generated archives live below it.
    #[serde(default = "default_temp_dir")]
    pub temp_dir: PathBuf,
    /// Subdirectory of `temp_dir` receiving generated archives.
    #[serde(default = "default_deploy_subdir")]
    pub deploy_subdir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { temp_dir: default_temp_dir(), deploy_subdir: default_deploy_subdir() }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.temp_dir.as_os_str().is_empty() {
            return Err(AppError::config_error("server.temp_dir must not be empty"));
        }
        let subdir = Path::new(self.deploy_subdir.trim());
        let relative = subdir.components().all(|c| matches!(c, Component::Normal(_)));
        if subdir.as_os_str().is_empty() || subdir.is_absolute() || !relative {
            return Err(AppError::config_error(
                "server.deploy_subdir must be a non-empty relative name",
            ));
        }
        Ok(())
    }

    /// Directory receiving generated archives.
    pub fn deploy_dir(&self) -> PathBuf {
        self.temp_dir.join(&self.deploy_subdir)
    }
}

/// Descriptor content settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DescriptorConfig {
    /// Namespace prefixed to the deployment's security domain.
    #[serde(default = "default_security_domain_prefix")]
    pub security_domain_prefix: String,
    /// Realm written to `login-config/realm-name`.
    #[serde(default = "default_realm_name")]
    pub realm_name: String,
}

impl Default for DescriptorConfig {
    fn default() -> Self {
        Self {
            security_domain_prefix: default_security_domain_prefix(),
            realm_name: default_realm_name(),
        }
    }
}

impl DescriptorConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.realm_name.trim().is_empty() {
            return Err(AppError::config_error("descriptor.realm_name must not be empty"));
        }
        Ok(())
    }
}

fn default_temp_dir() -> PathBuf {
    std::env::temp_dir().join("wsgen")
}

fn default_deploy_subdir() -> String {
    "deploy".to_string()
}

fn default_security_domain_prefix() -> String {
    "java:/jaas/".to_string()
}

fn default_realm_name() -> String {
    "EJBServiceEndpointServlet Realm".to_string()
}
