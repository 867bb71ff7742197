use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::ServiceRecord;

/// Errors raised when mutating a vehicle's odometer state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OdometerError {
    /// Odometer readings only move forward; a reading at or below the current
    /// one is rejected.
    #[error("new odometer reading {reading} must be greater than current reading {current}")]
    NotIncreasing { reading: u32, current: u32 },
}

/// A vehicle's odometer state.
///
/// `current_odometer` is monotonically non-decreasing over the vehicle's
/// lifetime and never drops below `initial_odometer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleState {
    pub initial_odometer: u32,
    pub current_odometer: u32,
}

impl VehicleState {
    /// Creates a vehicle whose current reading equals its initial reading.
    pub fn new(initial_odometer: u32) -> Self {
        Self {
            initial_odometer,
            current_odometer: initial_odometer,
        }
    }

    pub fn with_current(
        initial_odometer: u32,
        current_odometer: u32,
    ) -> Self {
        Self {
            initial_odometer,
            current_odometer,
        }
    }

    /// Records a manual odometer update.
    ///
    /// # Errors
    ///
    /// Returns [`OdometerError::NotIncreasing`] if `reading` is not strictly
    /// greater than the current reading.
    pub fn record_odometer(
        &mut self,
        reading: u32,
    ) -> Result<(), OdometerError> {
        if reading <= self.current_odometer {
            return Err(OdometerError::NotIncreasing {
                reading,
                current: self.current_odometer,
            });
        }
        self.current_odometer = reading;
        Ok(())
    }

    /// Folds a newly logged service record into the odometer state.
    ///
    /// A service performed at a higher reading than the vehicle's current one
    /// implies the vehicle has been driven at least that far, so the current
    /// reading is bumped to match. Lower readings (back-dated services) leave
    /// the state untouched.
    pub fn absorb_service(
        &mut self,
        record: &ServiceRecord,
    ) {
        if record.odometer_at_service > self.current_odometer {
            debug!(
                from = self.current_odometer,
                to = record.odometer_at_service,
                "service record advances current odometer"
            );
            self.current_odometer = record.odometer_at_service;
        }
    }

    /// Recomputes the current reading after history edits.
    ///
    /// The current reading becomes the maximum of the initial reading and the
    /// highest odometer across the remaining history.
    pub fn rebaseline(
        &mut self,
        history: &[ServiceRecord],
    ) {
        let highest_history = history
            .iter()
            .map(|r| r.odometer_at_service)
            .max()
            .unwrap_or(0);
        self.current_odometer = self.initial_odometer.max(highest_history);
    }
}
