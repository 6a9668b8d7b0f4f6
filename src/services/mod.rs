//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación.

pub mod estimates_service;

pub use estimates_service::{EstimatesService, ServiceError};
