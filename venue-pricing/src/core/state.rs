//! Server state shared by all handlers
//!
//! Holds only immutable configuration; pricing itself is stateless.

use std::sync::Arc;

use super::Config;

#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
}

impl ServerState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Service types priced per table
    pub fn per_table_service_types(&self) -> &[String] {
        &self.config.per_table_service_types
    }
}
