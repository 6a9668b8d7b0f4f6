//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use sqlx::PgPool;

use crate::repositories::{EstimateStore, PgEstimateStore};

/// Estado compartido: el store de estimates detrás de su trait, para que
/// el mismo router sirva PostgreSQL en producción y el store en memoria
/// en los tests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EstimateStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EstimateStore>) -> Self {
        Self { store }
    }

    pub fn with_postgres(pool: PgPool) -> Self {
        Self::new(Arc::new(PgEstimateStore::new(pool)))
    }
}
