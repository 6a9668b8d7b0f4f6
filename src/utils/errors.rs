//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores de la capa HTTP
//! y su conversión a respuestas apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::utils::validation::FieldErrors;

/// Códigos de error estables de la aplicación.
///
/// Los clientes hacen branch sobre estos códigos, nunca sobre el texto
/// del mensaje.
pub mod error_codes {
    /// Error al insertar o actualizar datos en la base de datos.
    pub const DATABASE_UPDATE_ERROR: &str = "16b52b61432746489c8ea54a3bf5124b";
}

/// Errores de la capa HTTP
#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to validate data")]
    Validation {
        code: &'static str,
        fields: FieldErrors,
    },

    #[error("database update failed: {message}")]
    Database {
        code: &'static str,
        message: String,
    },

    #[error("not found")]
    NotFound,

    #[error("bad request: {0}")]
    BadRequest(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Validation { code, fields } => {
                tracing::warn!("Validation error: {:?}", fields);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "Failed to validate data.".to_string(),
                        errors: Some(fields),
                        code: Some(code.to_string()),
                    },
                )
            }

            AppError::Database { code, message } => {
                tracing::error!("Database error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Database Error".to_string(),
                        message: format!("Failed to update the database: {}", message),
                        errors: None,
                        code: Some(code.to_string()),
                    },
                )
            }

            // 404 con body vacío: la ausencia no es un error de la API
            AppError::NotFound => return StatusCode::NOT_FOUND.into_response(),

            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        errors: None,
                        code: None,
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para handlers que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
