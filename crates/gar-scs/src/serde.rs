use gar_core::{ErrorInfo, GarError};

use crate::report::ScsReport;

/// Serialises a report into indented JSON.
pub fn report_to_json(report: &ScsReport) -> Result<String, GarError> {
    serde_json::to_string_pretty(report)
        .map_err(|err| GarError::Serde(ErrorInfo::new("report-serialize", err.to_string())))
}

/// Deserialises a report from JSON text.
pub fn report_from_json(json: &str) -> Result<ScsReport, GarError> {
    serde_json::from_str(json)
        .map_err(|err| GarError::Serde(ErrorInfo::new("report-deserialize", err.to_string())))
}
