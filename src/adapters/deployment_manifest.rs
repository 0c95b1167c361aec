//! Deployment manifests describing a deployment on disk (TOML or YAML).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{
    AppError, BeanSecurity, Deployment, DeploymentInfo, DeploymentType, Endpoint, SecurityMetadata,
};

/// Serialization format of a manifest file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Toml,
    Yaml,
}

impl ManifestFormat {
    /// Pick the format from the file extension; anything but `.yml`/`.yaml` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml") | Some("yaml") => ManifestFormat::Yaml,
            _ => ManifestFormat::Toml,
        }
    }
}

/// On-disk description of a deployment.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeploymentManifest {
    /// Canonical deployment name, e.g. `ejb/hello.jar`.
    pub name: String,
    #[serde(rename = "type")]
    pub deployment_type: DeploymentType,
    #[serde(default)]
    pub context_root: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
    /// EJB 2.1 assembly-descriptor roles.
    #[serde(default)]
    pub assembly_roles: Vec<String>,
    /// EJB 3 bean security annotations.
    #[serde(default)]
    pub beans: Vec<BeanSecurity>,
}

impl DeploymentManifest {
    pub fn parse(content: &str, format: ManifestFormat) -> Result<Self, AppError> {
        match format {
            ManifestFormat::Toml => Ok(toml::from_str(content)?),
            ManifestFormat::Yaml => serde_yaml::from_str(content).map_err(|e| {
                AppError::ParseError { what: "deployment manifest".into(), details: e.to_string() }
            }),
        }
    }

    /// Build the deployment with its deployment info attached.
    pub fn into_deployment(self) -> Deployment {
        let mut deployment = Deployment::new(self.deployment_type);
        deployment.context_root = self.context_root;
        deployment.properties = self.properties;
        deployment.endpoints = self.endpoints;
        deployment.security =
            SecurityMetadata { assembly_roles: self.assembly_roles, beans: self.beans };
        deployment.info = Some(DeploymentInfo::new(&self.name));
        deployment
    }
}

/// Read and parse a manifest file into a deployment.
pub fn load_manifest(path: &Path) -> Result<Deployment, AppError> {
    let content = fs::read_to_string(path)?;
    let manifest = DeploymentManifest::parse(&content, ManifestFormat::from_path(path))?;
    Ok(manifest.into_deployment())
}
