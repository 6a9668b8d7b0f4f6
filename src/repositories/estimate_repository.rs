//! Repositorio de Estimates
//!
//! Define el contrato de persistencia que consume la capa de servicios
//! y su implementación sobre PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::Estimate;

/// Errores de la capa de persistencia
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Contrato de persistencia para estimates.
///
/// Es el único seam que ve `EstimatesService`: un insert que asigna el
/// identificador, una búsqueda por primary key y un overwrite completo
/// de las columnas mutables. Cualquier fallo se reporta como `StoreError`.
#[async_trait]
pub trait EstimateStore: Send + Sync {
    /// Persiste una fila nueva y devuelve el id asignado por el store.
    async fn insert(&self, estimate: &Estimate) -> Result<Uuid, StoreError>;

    /// Busca un estimate por primary key. La ausencia no es un error.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Estimate>, StoreError>;

    /// Sobreescribe todas las columnas mutables de la fila con ese id.
    async fn update(&self, estimate: &Estimate) -> Result<(), StoreError>;
}

/// Implementación PostgreSQL del store
pub struct PgEstimateStore {
    pool: PgPool,
}

impl PgEstimateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EstimateStore for PgEstimateStore {
    async fn insert(&self, estimate: &Estimate) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO estimates (id, first_name, last_name, car_type, year, model, license_plate, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(id)
        .bind(&estimate.first_name)
        .bind(&estimate.last_name)
        .bind(estimate.car_type)
        .bind(&estimate.year)
        .bind(&estimate.model)
        .bind(&estimate.license_plate)
        .bind(estimate.status)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Estimate>, StoreError> {
        let estimate = sqlx::query_as::<_, Estimate>(
            r#"
            SELECT id, first_name, last_name, car_type, year, model, license_plate, status
            FROM estimates
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(estimate)
    }

    async fn update(&self, estimate: &Estimate) -> Result<(), StoreError> {
        // Overwrite completo de los campos mutables; last-write-wins,
        // sin token de concurrencia optimista.
        sqlx::query(
            r#"
            UPDATE estimates
            SET first_name = $2,
                last_name = $3,
                car_type = $4,
                year = $5,
                model = $6,
                license_plate = $7,
                status = $8
            WHERE id = $1
            "#,
        )
        .bind(estimate.id)
        .bind(&estimate.first_name)
        .bind(&estimate.last_name)
        .bind(estimate.car_type)
        .bind(&estimate.year)
        .bind(&estimate.model)
        .bind(&estimate.license_plate)
        .bind(estimate.status)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
