pub mod estimates_controller;

pub use estimates_controller::EstimatesController;
