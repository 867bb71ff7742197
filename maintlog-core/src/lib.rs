pub mod calculations;
pub mod models;

pub use calculations::{DueEstimator, DueEstimatorConfig, DueEstimatorError};
pub use models::*;
