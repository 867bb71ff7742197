use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ServiceType;

/// Three-way due classification for a service type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueStatus {
    Ok,
    DueSoon,
    Overdue,
}

impl DueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::DueSoon => "due_soon",
            Self::Overdue => "overdue",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ok" => Some(Self::Ok),
            "due_soon" => Some(Self::DueSoon),
            "overdue" => Some(Self::Overdue),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::DueSoon => "Due Soon",
            Self::Overdue => "Overdue",
        }
    }
}

/// One row of the due summary, recomputed on demand from the vehicle state
/// and service history. Never a source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuePrediction {
    pub service_type: ServiceType,
    pub last_service_date: Option<NaiveDate>,
    pub last_service_odometer: Option<u32>,
    pub next_due_odometer: u32,
    pub estimated_due_date: Option<NaiveDate>,
    pub status: DueStatus,

    /// How much history backs this prediction: high when a prior record of
    /// the type exists, low when the baseline is assumed from the current
    /// reading.
    pub confidence: Decimal,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn status_as_str_and_parse_round_trip() {
        for status in [DueStatus::Ok, DueStatus::DueSoon, DueStatus::Overdue] {
            assert_eq!(DueStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn status_parse_rejects_unknown_tag() {
        assert_eq!(DueStatus::parse("pending"), None);
    }
}
