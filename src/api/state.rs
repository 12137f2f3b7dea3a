//! Application state - Dependency injection container.
//!
//! Holds the registration service and the persistence handle. The handle
//! is initialized once at process start and torn down at shutdown; there
//! is no module-level client state.

use std::sync::Arc;

use crate::infra::{Database, UserAccountStore};
use crate::services::{Registrar, RegistrationService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Registration service
    pub registration: Arc<dyn RegistrationService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database.
    ///
    /// Wires the repository and service layers over the shared connection.
    pub fn from_database(database: Arc<Database>) -> Self {
        let repo = Arc::new(UserAccountStore::new(database.get_connection()));
        let registration = Arc::new(Registrar::new(repo));

        Self {
            registration,
            database,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(registration: Arc<dyn RegistrationService>, database: Arc<Database>) -> Self {
        Self {
            registration,
            database,
        }
    }
}
