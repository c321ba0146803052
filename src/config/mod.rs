pub mod ellipsoid;
pub mod pipeline;

pub use ellipsoid::Ellipsoid;
pub use pipeline::{InterpolationMethod, OutOfRangePolicy, PipelineConfig};
