//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod estimate;

pub use estimate::{Estimate, EstimateStatus, VehicleType};
