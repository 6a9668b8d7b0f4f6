//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para acumular y aplanar
//! errores de validación por campo.

use std::collections::BTreeMap;

use validator::ValidationErrors;

/// Mapa ordenado de nombre de campo a lista de mensajes de error.
///
/// BTreeMap para que la serialización JSON sea determinística.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Agregar un mensaje de error para un campo
pub fn add_field_error(errors: &mut FieldErrors, field: &str, message: impl Into<String>) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.into());
}

/// Aplanar los `ValidationErrors` del crate validator en un `FieldErrors`.
///
/// Usa el mensaje explícito del atributo `#[validate]` cuando existe,
/// y el código del validador como fallback.
pub fn collect_field_errors(validation_errors: &ValidationErrors) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for (field, field_errors) in validation_errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            add_field_error(&mut errors, field, message);
        }
    }
    errors
}
