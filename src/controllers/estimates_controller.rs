//! Controller de Estimates
//!
//! Orquesta el boundary HTTP: validación estructural del payload (el
//! equivalente al model binding), el chequeo de id de ruta vs. payload en
//! PUT, y el mapeo de errores del servicio a respuestas HTTP.

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::models::Estimate;
use crate::repositories::EstimateStore;
use crate::services::estimates_service::ERROR_CODE_UPDATE_VALIDATION;
use crate::services::EstimatesService;
use crate::utils::errors::AppError;
use crate::utils::validation::collect_field_errors;

pub struct EstimatesController {
    service: EstimatesService,
}

impl EstimatesController {
    pub fn new(store: Arc<dyn EstimateStore>) -> Self {
        Self {
            service: EstimatesService::new(store),
        }
    }

    /// Registra un estimate nuevo.
    ///
    /// El servicio ya corre la validación estructural antes de las reglas
    /// de negocio, así que acá solo se delega y se mapea el resultado.
    pub async fn create(&self, estimate: Estimate) -> Result<Estimate, AppError> {
        let created = self.service.create_estimate(estimate).await?;
        Ok(created)
    }

    /// Busca un estimate por id; la ausencia se convierte en 404 acá.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Estimate, AppError> {
        self.service
            .get_estimate_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Actualiza un estimate existente.
    ///
    /// El id de la ruta debe coincidir con el del payload; ese chequeo y
    /// la validación estructural ocurren antes de invocar al servicio.
    pub async fn update(&self, route_id: Uuid, estimate: Estimate) -> Result<Estimate, AppError> {
        if estimate.id != route_id {
            return Err(AppError::BadRequest(format!(
                "The id in the route (\"{}\") does not match the id in the payload (\"{}\").",
                route_id, estimate.id
            )));
        }

        if let Err(errors) = estimate.validate() {
            return Err(AppError::Validation {
                code: ERROR_CODE_UPDATE_VALIDATION,
                fields: collect_field_errors(&errors),
            });
        }

        let updated = self.service.update_estimate(estimate).await?;
        Ok(updated)
    }
}
