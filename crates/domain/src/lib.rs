pub mod config;
pub mod error;
pub mod estimate;
pub mod io;

pub use crate::config::EstimatorConfig;
pub use crate::error::DomainError;
pub use crate::estimate::{EstimationResult, TempoReport};
pub use crate::io::{ExportFormat, ReportExporter, SerdeExporter};
