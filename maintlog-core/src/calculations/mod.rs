//! Maintenance-due estimation.
//!
//! This module projects, per service type, the next due odometer reading and
//! an estimated due date from a vehicle's service history and current
//! odometer state.

pub mod common;
pub mod due_estimator;

pub use due_estimator::{DueEstimator, DueEstimatorConfig, DueEstimatorError};
