use serde::{Deserialize, Serialize};

use crate::{error::DomainError, estimate::TempoReport};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

pub trait ReportExporter {
    fn export(&self, reports: &[TempoReport], format: ExportFormat)
        -> Result<Vec<u8>, DomainError>;
}

pub struct SerdeExporter;

impl ReportExporter for SerdeExporter {
    fn export(
        &self,
        reports: &[TempoReport],
        format: ExportFormat,
    ) -> Result<Vec<u8>, DomainError> {
        match format {
            ExportFormat::Json => serde_json::to_vec_pretty(reports)
                .map_err(|err| DomainError::Serialization(err.to_string())),
            ExportFormat::Yaml => serde_yaml::to_string(reports)
                .map(String::into_bytes)
                .map_err(|err| DomainError::Serialization(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::EstimationResult;

    fn report() -> TempoReport {
        TempoReport {
            source: "A-00.wav".to_string(),
            sample_rate: 44_100,
            channels: 1,
            duration_seconds: 2.0,
            onsets: 5,
            result: EstimationResult::new(120.0, 4),
        }
    }

    #[test]
    fn exports_json() {
        let bytes = SerdeExporter
            .export(&[report()], ExportFormat::Json)
            .unwrap();
        let output = String::from_utf8(bytes).unwrap();
        assert!(output.contains("\"source\": \"A-00.wav\""));
        assert!(output.contains("\"beats_per_bar\": 4"));
    }

    #[test]
    fn exports_yaml() {
        let bytes = SerdeExporter
            .export(&[report()], ExportFormat::Yaml)
            .unwrap();
        let output = String::from_utf8(bytes).unwrap();
        assert!(output.contains("source: A-00.wav"));
        let parsed: Vec<TempoReport> = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed, vec![report()]);
    }
}
