pub mod bar;
pub mod estimator;
pub mod interval;
pub mod onset;
pub mod pipeline;
pub mod tempo;

pub use estimator::{OnsetTempoEstimator, TempoAnalysis};
pub use pipeline::{TempoJob, TempoPipeline};
