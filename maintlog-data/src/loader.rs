use std::io::Read;

use chrono::NaiveDate;
use maintlog_core::{ServiceRecord, ServiceType};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading service-history data.
#[derive(Debug, Error)]
pub enum ServiceHistoryLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Unknown service type: {0}")]
    UnknownServiceType(String),
}

impl From<csv::Error> for ServiceHistoryLoaderError {
    fn from(err: csv::Error) -> Self {
        ServiceHistoryLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a service-history CSV export.
///
/// The CSV format:
/// - `service_type`: the service type code (`oil_change`, `tire_rotation`, ...)
/// - `service_date`: ISO calendar date (`YYYY-MM-DD`)
/// - `odometer_at_service`: odometer reading at service time
/// - `cost`: amount paid (empty when unknown)
/// - `notes`: free text (may be empty)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServiceHistoryRow {
    pub service_type: String,
    pub service_date: NaiveDate,
    pub odometer_at_service: u32,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub cost: Option<Decimal>,
    pub notes: Option<String>,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for service-history data from CSV files.
///
/// Service type codes are validated against the fixed enumeration during
/// conversion; everything else is handled by the CSV deserializer.
pub struct ServiceHistoryLoader;

impl ServiceHistoryLoader {
    /// Parse service-history rows from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<ServiceHistoryRow>, ServiceHistoryLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut rows = Vec::new();

        for result in csv_reader.deserialize() {
            let row: ServiceHistoryRow = result?;
            rows.push(row);
        }

        Ok(rows)
    }

    /// Convert parsed rows into domain service records.
    ///
    /// Fails on the first row whose service type code is not part of the
    /// fixed enumeration.
    pub fn into_records(
        rows: Vec<ServiceHistoryRow>,
    ) -> Result<Vec<ServiceRecord>, ServiceHistoryLoaderError> {
        rows.into_iter()
            .map(|row| {
                let service_type = ServiceType::parse(&row.service_type).ok_or_else(|| {
                    ServiceHistoryLoaderError::UnknownServiceType(row.service_type.clone())
                })?;

                Ok(ServiceRecord {
                    service_type,
                    service_date: row.service_date,
                    odometer_at_service: row.odometer_at_service,
                    cost: row.cost,
                    notes: row.notes.filter(|n| !n.trim().is_empty()),
                })
            })
            .collect()
    }

    /// Parse and convert in one step.
    pub fn load<R: Read>(reader: R) -> Result<Vec<ServiceRecord>, ServiceHistoryLoaderError> {
        let rows = Self::parse(reader)?;
        Self::into_records(rows)
    }
}
