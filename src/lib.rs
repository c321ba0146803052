pub mod config;
pub mod constants;
pub mod coordinates;
pub mod errors;
pub mod models;
pub mod numerics;
pub mod physics;
pub mod pipeline;

pub use errors::TrackError;
pub use pipeline::{AppendFileSink, ReportSink, VelocityPipeline, VelocityProfile, VelocityReport};
