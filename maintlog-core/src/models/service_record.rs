use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ServiceType;

/// A single entry in a vehicle's service history.
///
/// Records are immutable once created. Input order does not matter; analysis
/// orders them by `service_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub service_type: ServiceType,
    pub service_date: NaiveDate,
    pub odometer_at_service: u32,
    pub cost: Option<Decimal>,
    pub notes: Option<String>,
}

impl ServiceRecord {
    pub fn new(
        service_type: ServiceType,
        service_date: NaiveDate,
        odometer_at_service: u32,
    ) -> Self {
        Self {
            service_type,
            service_date,
            odometer_at_service,
            cost: None,
            notes: None,
        }
    }
}
