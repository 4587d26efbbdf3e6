pub mod metrics;
pub mod params;
pub mod sample;

pub use metrics::{ConfusionCounts, MetricsResult};
pub use params::{DEFAULT_SAMPLE_SIZE, DistributionParams, MAX_SAMPLE_SIZE};
pub use sample::{SampleClass, ScoreSample};
