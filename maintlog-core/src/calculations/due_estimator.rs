//! Maintenance-due estimation from service history.
//!
//! Given a vehicle's current odometer reading and its service history, the
//! estimator computes one prediction per interval-table entry:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Find the most recent history record of the service type |
//! | 2    | Next due odometer: last service reading + interval (or current reading + interval when no record exists) |
//! | 3    | Average daily distance since the last service of the type |
//! | 4    | Estimated due date: distance remaining ÷ daily distance, projected from today |
//! | 5    | Status: Overdue / Due Soon / OK against the due-soon band |
//!
//! Every degenerate case (no history, no distance driven, not enough elapsed
//! time, already past due) maps to an absent field, never an error. The only
//! error the estimator raises is an invalid configuration.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use maintlog_core::{
//!     DueEstimator, DueStatus, ServiceIntervalTable, ServiceRecord, ServiceType, VehicleState,
//! };
//!
//! let table = ServiceIntervalTable::default();
//! let estimator = DueEstimator::new(&table);
//!
//! // Oil change at 45,000 twenty days ago; 49,000 on the clock today.
//! let vehicle = VehicleState::with_current(40_000, 49_000);
//! let history = vec![ServiceRecord::new(
//!     ServiceType::OilChange,
//!     NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
//!     45_000,
//! )];
//! let today = NaiveDate::from_ymd_opt(2025, 5, 21).unwrap();
//!
//! let summary = estimator.build_summary(&vehicle, &history, today).unwrap();
//!
//! let oil = &summary[0];
//! assert_eq!(oil.next_due_odometer, 50_000);
//! assert_eq!(oil.estimated_due_date, NaiveDate::from_ymd_opt(2025, 5, 26));
//! assert_eq!(oil.status, DueStatus::DueSoon);
//! ```

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::round_whole_days;
use crate::models::{DuePrediction, DueStatus, ServiceIntervalTable, ServiceRecord, ServiceType, VehicleState};

/// Errors that can occur when configuring the due estimator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DueEstimatorError {
    /// The due-soon fraction must be between 0 and 1.
    #[error("due-soon fraction must be between 0 and 1, got {0}")]
    InvalidDueSoonFraction(Decimal),

    /// The minimum elapsed days floor must be non-negative.
    #[error("minimum elapsed days must be non-negative, got {0}")]
    InvalidMinElapsedDays(Decimal),
}

/// Tuning parameters for due estimation.
///
/// Both values are tuning choices rather than domain requirements, so they
/// are configuration rather than hard-coded invariants.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use maintlog_core::DueEstimatorConfig;
///
/// let config = DueEstimatorConfig {
///     due_soon_fraction: dec!(0.2),
///     min_elapsed_days: dec!(0.5),
/// };
/// assert_eq!(config, DueEstimatorConfig::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueEstimatorConfig {
    /// Trailing portion of the interval during which a service is flagged
    /// Due Soon before becoming overdue. 0.2 flags the final 20%.
    pub due_soon_fraction: Decimal,

    /// Minimum elapsed days between the last service and today before a
    /// daily-distance rate is considered meaningful. The half-day default
    /// guards against wildly unstable rates from same-day readings.
    pub min_elapsed_days: Decimal,
}

impl Default for DueEstimatorConfig {
    fn default() -> Self {
        Self {
            due_soon_fraction: Decimal::new(2, 1),
            min_elapsed_days: Decimal::new(5, 1),
        }
    }
}

impl DueEstimatorConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`DueEstimatorError`] if `due_soon_fraction` is outside
    /// [0, 1] or `min_elapsed_days` is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use maintlog_core::{DueEstimatorConfig, DueEstimatorError};
    ///
    /// let config = DueEstimatorConfig {
    ///     due_soon_fraction: dec!(1.5),
    ///     ..DueEstimatorConfig::default()
    /// };
    ///
    /// let result = config.validate();
    /// assert_eq!(result, Err(DueEstimatorError::InvalidDueSoonFraction(dec!(1.5))));
    /// ```
    pub fn validate(&self) -> Result<(), DueEstimatorError> {
        if self.due_soon_fraction < Decimal::ZERO || self.due_soon_fraction > Decimal::ONE {
            return Err(DueEstimatorError::InvalidDueSoonFraction(
                self.due_soon_fraction,
            ));
        }
        if self.min_elapsed_days < Decimal::ZERO {
            return Err(DueEstimatorError::InvalidMinElapsedDays(
                self.min_elapsed_days,
            ));
        }
        Ok(())
    }
}

/// Maintenance-due estimator over a service interval table.
///
/// Pure and idempotent: identical inputs always yield identical outputs.
/// `today` is injected by the caller rather than read from the clock, so the
/// estimator can run once per render without hidden time dependence.
#[derive(Debug, Clone)]
pub struct DueEstimator<'a> {
    interval_table: &'a ServiceIntervalTable,
    config: DueEstimatorConfig,
}

impl<'a> DueEstimator<'a> {
    /// Creates an estimator with the default configuration.
    pub fn new(interval_table: &'a ServiceIntervalTable) -> Self {
        Self::with_config(interval_table, DueEstimatorConfig::default())
    }

    pub fn with_config(
        interval_table: &'a ServiceIntervalTable,
        config: DueEstimatorConfig,
    ) -> Self {
        Self {
            interval_table,
            config,
        }
    }

    /// Builds the full due summary: one [`DuePrediction`] per interval-table
    /// entry, in table order, regardless of whether the vehicle has any
    /// history for that type.
    ///
    /// # Errors
    ///
    /// Returns [`DueEstimatorError`] if the configuration is invalid. All
    /// degenerate input cases map to absent fields instead.
    pub fn build_summary(
        &self,
        vehicle: &VehicleState,
        history: &[ServiceRecord],
        today: NaiveDate,
    ) -> Result<Vec<DuePrediction>, DueEstimatorError> {
        self.config.validate()?;

        let mut predictions = Vec::with_capacity(self.interval_table.len());
        for (service_type, interval) in self.interval_table.iter() {
            let last = latest_record_of_type(history, service_type);
            let next_due_odometer = next_due_odometer(last, vehicle.current_odometer, interval);

            let daily_rate =
                self.estimate_daily_distance(last, vehicle.current_odometer, today);
            let estimated_due_date = self.estimate_due_date(
                next_due_odometer,
                vehicle.current_odometer,
                daily_rate,
                today,
            );
            let status =
                self.classify_status(vehicle.current_odometer, next_due_odometer, interval);

            predictions.push(DuePrediction {
                service_type,
                last_service_date: last.map(|r| r.service_date),
                last_service_odometer: last.map(|r| r.odometer_at_service),
                next_due_odometer,
                estimated_due_date,
                status,
                confidence: confidence_for(last.is_some()),
            });
        }

        Ok(predictions)
    }

    /// Average distance driven per day since the last service of a type.
    ///
    /// Returns `None` (indeterminate) when there is no prior record of the
    /// type, when no distance has been driven since it, or when less than
    /// [`DueEstimatorConfig::min_elapsed_days`] have elapsed.
    pub fn estimate_daily_distance(
        &self,
        last_record: Option<&ServiceRecord>,
        current_odometer: u32,
        today: NaiveDate,
    ) -> Option<Decimal> {
        let last = last_record?;

        let delta_distance =
            i64::from(current_odometer) - i64::from(last.odometer_at_service);
        let delta_days = today.signed_duration_since(last.service_date).num_days();

        if delta_distance <= 0 {
            warn!(
                service_type = last.service_type.as_str(),
                delta_distance,
                "no distance driven since last service; daily rate indeterminate"
            );
            return None;
        }
        if Decimal::from(delta_days) <= self.config.min_elapsed_days {
            warn!(
                service_type = last.service_type.as_str(),
                delta_days,
                "not enough elapsed time since last service; daily rate indeterminate"
            );
            return None;
        }

        Some(Decimal::from(delta_distance) / Decimal::from(delta_days))
    }

    /// Projects the calendar date at which the next service falls due.
    ///
    /// Returns `None` (no projection) when the rate is indeterminate or
    /// non-positive, or when the due threshold has already been crossed:
    /// a date estimate is meaningless once the service is due.
    pub fn estimate_due_date(
        &self,
        next_due_odometer: u32,
        current_odometer: u32,
        daily_rate: Option<Decimal>,
        today: NaiveDate,
    ) -> Option<NaiveDate> {
        let rate = daily_rate?;

        if next_due_odometer <= current_odometer {
            return None;
        }
        if rate <= Decimal::ZERO {
            warn!(%rate, "non-positive daily rate; no due-date projection");
            return None;
        }

        let distance_remaining = Decimal::from(next_due_odometer - current_odometer);
        let days_remaining = round_whole_days(distance_remaining / rate).to_i64()?;

        today.checked_add_signed(Duration::try_days(days_remaining)?)
    }

    /// Classifies how close the vehicle is to the next due threshold.
    ///
    /// First match wins:
    /// 1. current reading at or past the due reading → Overdue
    /// 2. current reading within the trailing due-soon band → Due Soon
    /// 3. otherwise → OK
    pub fn classify_status(
        &self,
        current_odometer: u32,
        next_due_odometer: u32,
        interval: u32,
    ) -> DueStatus {
        if current_odometer >= next_due_odometer {
            return DueStatus::Overdue;
        }

        let due_soon_floor = Decimal::from(next_due_odometer)
            - self.config.due_soon_fraction * Decimal::from(interval);
        if Decimal::from(current_odometer) >= due_soon_floor {
            DueStatus::DueSoon
        } else {
            DueStatus::Ok
        }
    }
}

/// Next due odometer reading for a type.
///
/// With a prior record the service lasts one interval past the reading at
/// service time. With none, the first occurrence is assumed due one full
/// interval from the current reading, not from vehicle purchase.
fn next_due_odometer(
    last_record: Option<&ServiceRecord>,
    current_odometer: u32,
    interval: u32,
) -> u32 {
    match last_record {
        Some(record) => record.odometer_at_service.saturating_add(interval),
        None => current_odometer.saturating_add(interval),
    }
}

/// The most recent history record of `service_type`, ties broken by latest
/// date. Input order is irrelevant; equal dates yield either record.
fn latest_record_of_type(
    history: &[ServiceRecord],
    service_type: ServiceType,
) -> Option<&ServiceRecord> {
    history
        .iter()
        .filter(|r| r.service_type == service_type)
        .max_by_key(|r| r.service_date)
}

fn confidence_for(has_history: bool) -> Decimal {
    if has_history {
        Decimal::new(9, 1) // backed by a real record
    } else {
        Decimal::new(3, 1) // baseline assumed from the current reading
    }
}
