//! Servicio de Estimates
//!
//! Este módulo contiene la lógica de negocio de los estimates: las
//! invariantes de creación y actualización, y la mediación con la capa
//! de persistencia. Cualquier fallo del store se convierte acá en un
//! `ServiceError::Database`; ningún `StoreError` crudo escapa de esta capa.

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Estimate, EstimateStatus};
use crate::repositories::{EstimateStore, StoreError};
use crate::utils::errors::{error_codes, AppError};
use crate::utils::validation::{add_field_error, collect_field_errors, FieldErrors};

/// Código de error para violaciones de las reglas de creación de estimates.
pub const ERROR_CODE_CREATE_VALIDATION: &str = "b1e0060ad9244382a057ce4ac38e84a0";
/// Código de error para violaciones de las reglas de actualización de estimates.
pub const ERROR_CODE_UPDATE_VALIDATION: &str = "9f6cdd2ac84f4e6c8b7a3c0a51d94a6e";

/// Errores de la capa de servicios
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Los datos recibidos violan reglas estructurales o de negocio.
    /// `code` distingue qué rule-set falló (create vs. update).
    #[error("failed to validate data")]
    Validation {
        code: &'static str,
        fields: FieldErrors,
    },

    /// La capa de persistencia falló durante un insert/update.
    #[error("an error occurred while trying to save the estimate to the database: {source}")]
    Database {
        #[from]
        source: StoreError,
    },
}

impl ServiceError {
    /// Código estable asociado al error
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Validation { code, .. } => code,
            ServiceError::Database { .. } => error_codes::DATABASE_UPDATE_ERROR,
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation { code, fields } => AppError::Validation { code, fields },
            ServiceError::Database { source } => AppError::Database {
                code: error_codes::DATABASE_UPDATE_ERROR,
                message: source.to_string(),
            },
        }
    }
}

/// Servicio de estimates.
///
/// No tiene estado mutable propio: una misma instancia puede atender
/// requests concurrentes siempre que el store subyacente lo permita.
#[derive(Clone)]
pub struct EstimatesService {
    store: Arc<dyn EstimateStore>,
}

impl EstimatesService {
    pub fn new(store: Arc<dyn EstimateStore>) -> Self {
        Self { store }
    }

    /// Registra un estimate nuevo.
    ///
    /// Acumula TODAS las violaciones antes de fallar: las estructurales
    /// por campo y las dos reglas de negocio (status `Pending`, id vacío).
    /// La validación siempre ocurre antes de tocar el store.
    pub async fn create_estimate(&self, mut estimate: Estimate) -> Result<Estimate, ServiceError> {
        let mut violations = match estimate.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => collect_field_errors(&errors),
        };

        if estimate.status != EstimateStatus::Pending {
            add_field_error(
                &mut violations,
                "status",
                format!(
                    "New estimates must be created with a \"{}\" status.",
                    EstimateStatus::Pending
                ),
            );
        }
        if !estimate.id.is_nil() {
            add_field_error(
                &mut violations,
                "id",
                "New estimates must have an empty \"id\".",
            );
        }

        if !violations.is_empty() {
            return Err(ServiceError::Validation {
                code: ERROR_CODE_CREATE_VALIDATION,
                fields: violations,
            });
        }

        let id = self.store.insert(&estimate).await?;
        estimate.id = id;
        Ok(estimate)
    }

    /// Busca un estimate por id. La ausencia es `Ok(None)`, no un error:
    /// recién en el boundary HTTP se convierte en 404.
    pub async fn get_estimate_by_id(&self, id: Uuid) -> Result<Option<Estimate>, ServiceError> {
        let estimate = self.store.find_by_id(id).await?;
        Ok(estimate)
    }

    /// Actualiza un estimate existente, aplicando TODOS los campos del
    /// payload sobre la fila almacenada (el id no cambia).
    ///
    /// Solo se chequean las dos reglas de negocio (id no vacío, fila
    /// existente); las restricciones estructurales por campo se exigen en
    /// el boundary HTTP, no acá.
    pub async fn update_estimate(&self, estimate: Estimate) -> Result<Estimate, ServiceError> {
        let mut violations = FieldErrors::new();

        if estimate.id.is_nil() {
            add_field_error(
                &mut violations,
                "id",
                "Updated estimates must have a non-empty \"id\".",
            );
        } else if self.store.find_by_id(estimate.id).await?.is_none() {
            add_field_error(
                &mut violations,
                "id",
                format!(
                    "There is no estimate with id \"{}\" to be updated.",
                    estimate.id
                ),
            );
        }

        if !violations.is_empty() {
            return Err(ServiceError::Validation {
                code: ERROR_CODE_UPDATE_VALIDATION,
                fields: violations,
            });
        }

        self.store.update(&estimate).await?;
        Ok(estimate)
    }
}
