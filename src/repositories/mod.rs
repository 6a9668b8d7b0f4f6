pub mod estimate_repository;
pub mod memory;

pub use estimate_repository::{EstimateStore, PgEstimateStore, StoreError};
pub use memory::InMemoryEstimateStore;
