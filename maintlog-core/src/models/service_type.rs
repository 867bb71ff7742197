use serde::{Deserialize, Serialize};

/// The fixed set of maintenance kinds tracked per vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    OilChange,
    TireRotation,
    BrakeService,
    AirFilter,
    Battery,
    TimingBelt,
    Other,
}

impl ServiceType {
    /// All known service types, in presentation order.
    pub const ALL: [ServiceType; 7] = [
        Self::OilChange,
        Self::TireRotation,
        Self::BrakeService,
        Self::AirFilter,
        Self::Battery,
        Self::TimingBelt,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OilChange => "oil_change",
            Self::TireRotation => "tire_rotation",
            Self::BrakeService => "brake_service",
            Self::AirFilter => "air_filter",
            Self::Battery => "battery",
            Self::TimingBelt => "timing_belt",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "oil_change" => Some(Self::OilChange),
            "tire_rotation" => Some(Self::TireRotation),
            "brake_service" => Some(Self::BrakeService),
            "air_filter" => Some(Self::AirFilter),
            "battery" => Some(Self::Battery),
            "timing_belt" => Some(Self::TimingBelt),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Human-readable name for report output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OilChange => "Oil Change",
            Self::TireRotation => "Tire Rotation",
            Self::BrakeService => "Brake Service",
            Self::AirFilter => "Air Filter",
            Self::Battery => "Battery",
            Self::TimingBelt => "Timing Belt",
            Self::Other => "Other",
        }
    }
}
