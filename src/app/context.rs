use crate::domain::GeneratorConfig;
use crate::ports::ArchiveStore;
use crate::services::SecurityRolesHandlers;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ArchiveStore> {
    store: S,
    config: GeneratorConfig,
    roles: SecurityRolesHandlers,
}

impl<S: ArchiveStore> AppContext<S> {
    /// Create a new application context with the default security roles handlers.
    pub fn new(store: S, config: GeneratorConfig) -> Self {
        Self::with_roles(store, config, SecurityRolesHandlers::default())
    }

    /// Create a context with explicitly injected security roles handlers.
    pub fn with_roles(store: S, config: GeneratorConfig, roles: SecurityRolesHandlers) -> Self {
        Self { store, config, roles }
    }

    /// Get a reference to the archive store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn roles(&self) -> &SecurityRolesHandlers {
        &self.roles
    }
}
