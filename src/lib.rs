//! Threshold exploration over two synthetic risk-score populations.
//!
//! A [`Session`] owns a pair of generated [`ScoreSample`]s and recomputes
//! confusion-matrix rates against any threshold.

pub mod config;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod session;

pub use config::SessionConfig;
pub use error::{AppError, CoreError};
pub use model::{ConfusionCounts, DistributionParams, MetricsResult, SampleClass, ScoreSample};
pub use pipeline::stage1_generate::{RandomSource, generate};
pub use pipeline::stage2_metrics::compute_metrics;
pub use session::{Session, SessionPhase};
