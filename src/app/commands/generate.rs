//! Web app generation for EJB web-service deployments.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};
use url::Url;

use crate::adapters::xml_writer;
use crate::app::AppContext;
use crate::domain::{AppError, Deployment};
use crate::ports::{ArchiveStore, SecurityRolesHandler};
use crate::services::vendor_descriptor::{self, JBOSS_WEB_XML};
use crate::services::web_descriptor::{self, WEB_XML};

const ARCHIVE_FAILURE: &str = "Failed to create webservice.war";

/// Summary of a generated web archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArchive {
    /// `file:` URL of the archive directory.
    pub url: Url,
    pub path: PathBuf,
    pub servlets: usize,
    pub security_constraints: usize,
    pub login_method: Option<String>,
}

/// Generate the web app for an EJB deployment and record its URL on the
/// deployment info.
///
/// Deployments without an EJB bean model are left untouched and yield `None`.
pub fn execute<S: ArchiveStore>(
    ctx: &AppContext<S>,
    deployment: &mut Deployment,
) -> Result<Option<GeneratedArchive>, AppError> {
    deployment.info()?;

    let Some(model) = deployment.deployment_type.bean_model() else {
        debug!(
            deployment_type = %deployment.deployment_type,
            "Not an EJB deployment, skipping web app generation"
        );
        return Ok(None);
    };

    let archive = generate(ctx, deployment, ctx.roles().for_model(model))?;
    deployment.info_mut()?.webapp_url = Some(archive.url.clone());
    Ok(Some(archive))
}

/// Build both descriptors and write them into a fresh archive directory.
///
/// Both documents are built and serialized before any filesystem access, so a
/// missing context root leaves no trace on disk. A failure while writing the
/// archive does not remove what was already created.
pub fn generate<S: ArchiveStore>(
    ctx: &AppContext<S>,
    deployment: &Deployment,
    roles: &dyn SecurityRolesHandler,
) -> Result<GeneratedArchive, AppError> {
    let descriptor_config = &ctx.config().descriptor;
    let web_doc = web_descriptor::build(deployment, descriptor_config, roles);
    let vendor_doc = vendor_descriptor::build(deployment, descriptor_config)?;

    let web_xml = xml_writer::to_pretty_xml(&web_doc)?;
    let vendor_xml = xml_writer::to_pretty_xml(&vendor_doc)?;

    let deployment_name = deployment.info()?.canonical_name.replace('/', "-");
    let path = write_archive(ctx.store(), &deployment_name, &web_xml, &vendor_xml).map_err(
        |err| match err {
            AppError::Io(source) => AppError::deployment_failed(ARCHIVE_FAILURE, source),
            other => other,
        },
    )?;

    let url = Url::from_directory_path(&path).map_err(|()| {
        AppError::config_error(format!("Archive path is not absolute: {}", path.display()))
    })?;
    info!(%url, endpoints = deployment.endpoints.len(), "Generated web app");

    let root = web_doc.root();
    Ok(GeneratedArchive {
        url,
        path,
        servlets: root.children_named("servlet").count(),
        security_constraints: root.children_named("security-constraint").count(),
        login_method: root.find_text("login-config/auth-method").map(str::to_string),
    })
}

fn write_archive<S: ArchiveStore>(
    store: &S,
    deployment_name: &str,
    web_xml: &[u8],
    vendor_xml: &[u8],
) -> Result<PathBuf, AppError> {
    let archive = store.create_archive(deployment_name)?;
    store.write_descriptor(&archive, WEB_XML, web_xml)?;
    store.write_descriptor(&archive, JBOSS_WEB_XML, vendor_xml)?;
    Ok(archive)
}
