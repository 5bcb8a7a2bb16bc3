use std::{fmt, sync::Arc};

use sqlx::PgPool;

use hearth_config::Config;
use hearth_core::database::postgres::{
    PostgresContactMessagesRepository, PostgresHomesRepository, PostgresVisitsRepository,
};
use hearth_core::{CatalogService, ContactMessageService, VisitsService};

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub contact_messages: ContactMessageService,
    pub visits: VisitsService,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    /// Wires the Postgres repositories into the domain services.
    pub fn new(pool: PgPool, config: Arc<Config>) -> Self {
        let catalog = CatalogService::new(Arc::new(PostgresHomesRepository::new(pool.clone())));
        let contact_messages = ContactMessageService::new(Arc::new(
            PostgresContactMessagesRepository::new(pool.clone()),
        ));
        let visits = VisitsService::new(Arc::new(PostgresVisitsRepository::new(pool)));
        Self {
            catalog,
            contact_messages,
            visits,
            config,
        }
    }
}
