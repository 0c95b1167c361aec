//! Security role population for the supported bean models.

use std::collections::{BTreeSet, HashSet};

use crate::domain::{BeanModel, Deployment, Element};
use crate::ports::SecurityRolesHandler;

/// EJB 2.1: roles declared in the assembly descriptor, in declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssemblyDescriptorRoles;

impl SecurityRolesHandler for AssemblyDescriptorRoles {
    fn add_security_roles(&self, web_app: &mut Element, deployment: &Deployment) {
        let mut seen = HashSet::new();
        for role in &deployment.security.assembly_roles {
            if seen.insert(role.as_str()) {
                append_security_role(web_app, role);
            }
        }
    }
}

/// EJB 3: union of declared and allowed roles across all beans, sorted.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnotatedBeanRoles;

impl SecurityRolesHandler for AnnotatedBeanRoles {
    fn add_security_roles(&self, web_app: &mut Element, deployment: &Deployment) {
        let roles: BTreeSet<&str> = deployment
            .security
            .beans
            .iter()
            .flat_map(|bean| bean.declared_roles.iter().chain(&bean.roles_allowed))
            .map(String::as_str)
            .collect();
        for role in roles {
            append_security_role(web_app, role);
        }
    }
}

fn append_security_role(web_app: &mut Element, role: &str) {
    web_app.add_element("security-role").add_text_element("role-name", role);
}

/// The security roles handler for each bean model.
pub struct SecurityRolesHandlers {
    ejb21: Box<dyn SecurityRolesHandler>,
    ejb3: Box<dyn SecurityRolesHandler>,
}

impl SecurityRolesHandlers {
    pub fn new(ejb21: Box<dyn SecurityRolesHandler>, ejb3: Box<dyn SecurityRolesHandler>) -> Self {
        Self { ejb21, ejb3 }
    }

    pub fn for_model(&self, model: BeanModel) -> &dyn SecurityRolesHandler {
        match model {
            BeanModel::Ejb21 => self.ejb21.as_ref(),
            BeanModel::Ejb3 => self.ejb3.as_ref(),
        }
    }
}

impl Default for SecurityRolesHandlers {
    fn default() -> Self {
        Self::new(Box::new(AssemblyDescriptorRoles), Box::new(AnnotatedBeanRoles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BeanSecurity, DeploymentType};

    fn role_names(web_app: &Element) -> Vec<&str> {
        web_app.children_named("security-role").filter_map(|r| r.find_text("role-name")).collect()
    }

    #[test]
    fn assembly_roles_keep_declaration_order_without_duplicates() {
        let mut dep = Deployment::new(DeploymentType::JaxRpcEjb21);
        dep.security.assembly_roles = vec!["user".into(), "admin".into(), "user".into()];

        let mut web_app = Element::new("web-app");
        AssemblyDescriptorRoles.add_security_roles(&mut web_app, &dep);

        assert_eq!(role_names(&web_app), vec!["user", "admin"]);
    }

    #[test]
    fn bean_roles_are_merged_and_sorted() {
        let mut dep = Deployment::new(DeploymentType::JaxWsEjb3);
        dep.security.beans = vec![
            BeanSecurity {
                name: "A".into(),
                declared_roles: vec!["staff".into()],
                roles_allowed: vec!["admin".into()],
            },
            BeanSecurity {
                name: "B".into(),
                declared_roles: vec![],
                roles_allowed: vec!["admin".into(), "guest".into()],
            },
        ];

        let mut web_app = Element::new("web-app");
        AnnotatedBeanRoles.add_security_roles(&mut web_app, &dep);

        assert_eq!(role_names(&web_app), vec!["admin", "guest", "staff"]);
    }

    #[test]
    fn handlers_are_selected_by_model() {
        let mut dep = Deployment::new(DeploymentType::JaxRpcEjb21);
        dep.security.assembly_roles = vec!["legacy".into()];
        dep.security.beans = vec![BeanSecurity {
            name: "A".into(),
            roles_allowed: vec!["modern".into()],
            ..Default::default()
        }];

        let handlers = SecurityRolesHandlers::default();

        let mut legacy = Element::new("web-app");
        handlers.for_model(BeanModel::Ejb21).add_security_roles(&mut legacy, &dep);
        assert_eq!(role_names(&legacy), vec!["legacy"]);

        let mut modern = Element::new("web-app");
        handlers.for_model(BeanModel::Ejb3).add_security_roles(&mut modern, &dep);
        assert_eq!(role_names(&modern), vec!["modern"]);
    }
}
