use thiserror::Error;

use crate::model::SampleClass;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("empty sample: {0} scores contain no values")]
    EmptySample(SampleClass),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
