//! Modelo de Estimate
//!
//! Este módulo contiene el struct Estimate y sus enumeraciones para CRUD operations.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;
use validator::Validate;

/// Tipo de vehículo para el cual se solicita un estimate.
///
/// Se persiste como el nombre del variant (string) en una columna varchar,
/// nunca como su valor ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "VARCHAR")]
pub enum VehicleType {
    Other,
    Car,
    Truck,
    Suv,
}

/// Estado de un estimate - mapea a la columna varchar 'status'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "VARCHAR")]
pub enum EstimateStatus {
    /// La evaluación del estimate todavía está pendiente
    Pending,
    /// El estimate fue enviado al cliente, sin confirmación todavía
    Sent,
    /// El cliente recibió el estimate y reservó el servicio
    BookConfirmed,
}

impl EstimateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstimateStatus::Pending => "Pending",
            EstimateStatus::Sent => "Sent",
            EstimateStatus::BookConfirmed => "BookConfirmed",
        }
    }
}

impl std::fmt::Display for EstimateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimate principal - mapea exactamente a la tabla estimates
///
/// Un `id` nulo (nil UUID) significa "todavía no persistido": el store
/// asigna el identificador real al insertar. El payload HTTP puede omitir
/// el campo `id` por completo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
pub struct Estimate {
    #[serde(default)]
    pub id: Uuid,

    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters long"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters long"))]
    pub last_name: String,

    pub car_type: VehicleType,

    #[validate(length(min = 1, max = 20, message = "must be between 1 and 20 characters long"))]
    pub year: String,

    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters long"))]
    pub model: String,

    #[validate(length(min = 1, max = 30, message = "must be between 1 and 30 characters long"))]
    pub license_plate: String,

    pub status: EstimateStatus,
}
