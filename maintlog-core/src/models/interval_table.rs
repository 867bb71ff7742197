use serde::{Deserialize, Serialize};

use crate::models::ServiceType;

/// Recommended distance between successive services, per service type.
///
/// The table is built once and never mutated. Iteration order is definition
/// order and fixes the order of the due summary; the presentation layer may
/// resort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceIntervalTable {
    entries: Vec<(ServiceType, u32)>,
}

impl ServiceIntervalTable {
    pub fn new(entries: Vec<(ServiceType, u32)>) -> Self {
        Self { entries }
    }

    /// The recommended interval for `service_type`, if the table knows it.
    pub fn interval(
        &self,
        service_type: ServiceType,
    ) -> Option<u32> {
        self.entries
            .iter()
            .find(|(t, _)| *t == service_type)
            .map(|(_, interval)| *interval)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ServiceType, u32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ServiceIntervalTable {
    /// The stock interval table, in distance units driven between services.
    fn default() -> Self {
        Self::new(vec![
            (ServiceType::OilChange, 5_000),
            (ServiceType::TireRotation, 10_000),
            (ServiceType::AirFilter, 20_000),
            (ServiceType::BrakeService, 20_000),
            (ServiceType::Battery, 30_000),
            (ServiceType::TimingBelt, 80_000),
            (ServiceType::Other, 10_000),
        ])
    }
}
