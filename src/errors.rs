use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("data format error at line {line}: {message}")]
    DataFormat { line: u64, message: String },
    #[error("shape mismatch: `{name}` has {found} samples, expected {expected}")]
    ShapeMismatch {
        name: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("degenerate timestep at index {index}: dt = {dt} s")]
    DegenerateTimestep { index: usize, dt: f64 },
    #[error("requested time {requested} s is outside the track span [{start}, {end}]")]
    OutOfRange { requested: f64, start: f64, end: f64 },
    #[error("non-finite {field} at index {index}")]
    InvalidInput { index: usize, field: &'static str },
    #[error("at least {required} samples are required, found {found}")]
    InsufficientSamples { required: usize, found: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
    #[error("configuration error: {0}")]
    Config(#[from] serde_yaml::Error),
}
