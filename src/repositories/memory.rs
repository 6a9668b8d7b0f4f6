//! Store en memoria
//!
//! Implementación del `EstimateStore` sobre un mapa en memoria. Es el
//! test double que reemplaza a PostgreSQL en los tests de servicio y de
//! API, junto con un decorador que simula fallos del backend.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::Estimate;
use crate::repositories::estimate_repository::{EstimateStore, StoreError};

/// Store de estimates respaldado por un `HashMap` protegido por mutex.
#[derive(Default)]
pub struct InMemoryEstimateStore {
    rows: Mutex<HashMap<Uuid, Estimate>>,
}

impl InMemoryEstimateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cantidad de filas almacenadas
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EstimateStore for InMemoryEstimateStore {
    async fn insert(&self, estimate: &Estimate) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        let mut stored = estimate.clone();
        stored.id = id;
        self.rows.lock().unwrap().insert(id, stored);
        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Estimate>, StoreError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn update(&self, estimate: &Estimate) -> Result<(), StoreError> {
        self.rows
            .lock()
            .unwrap()
            .insert(estimate.id, estimate.clone());
        Ok(())
    }
}

/// Decorador que inyecta fallos de storage, para probar los caminos de
/// error de la capa de servicios sin una base de datos real.
pub struct FailingStore<S> {
    inner: S,
    fail_writes: bool,
    fail_reads: bool,
}

impl<S> FailingStore<S> {
    /// Todos los writes (insert/update) fallan; los reads pasan al inner.
    pub fn failing_writes(inner: S) -> Self {
        Self {
            inner,
            fail_writes: true,
            fail_reads: false,
        }
    }

    /// Todos los reads fallan; los writes pasan al inner.
    pub fn failing_reads(inner: S) -> Self {
        Self {
            inner,
            fail_writes: false,
            fail_reads: true,
        }
    }

    fn simulated_failure() -> StoreError {
        StoreError::Backend("simulated storage failure".to_string())
    }
}

#[async_trait]
impl<S: EstimateStore> EstimateStore for FailingStore<S> {
    async fn insert(&self, estimate: &Estimate) -> Result<Uuid, StoreError> {
        if self.fail_writes {
            return Err(Self::simulated_failure());
        }
        self.inner.insert(estimate).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Estimate>, StoreError> {
        if self.fail_reads {
            return Err(Self::simulated_failure());
        }
        self.inner.find_by_id(id).await
    }

    async fn update(&self, estimate: &Estimate) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(Self::simulated_failure());
        }
        self.inner.update(estimate).await
    }
}
