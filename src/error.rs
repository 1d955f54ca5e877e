use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("record index {index} out of bounds (len={len})")]
    RecordIndexOutOfBounds { index: usize, len: usize },

    #[error("import failed: {0}")]
    Import(String),
}
