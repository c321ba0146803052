use crate::config::ellipsoid::Ellipsoid;
use crate::constants::DEFAULT_RESULT_LOG;
use crate::errors::TrackError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationMethod {
    Linear,
    #[default]
    NaturalCubicSpline,
}

/// What to do with a query time outside the sampled span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRangePolicy {
    #[default]
    Reject,
    Extrapolate,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub ellipsoid: Ellipsoid,
    #[serde(default)]
    pub interpolation: InterpolationMethod,
    #[serde(default)]
    pub out_of_range: OutOfRangePolicy,
    /// File the reports are appended to; `None` disables the result log
    #[serde(default = "default_result_log")]
    pub result_log: Option<PathBuf>,
}

fn default_result_log() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_RESULT_LOG))
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            ellipsoid: Ellipsoid::default(),
            interpolation: InterpolationMethod::default(),
            out_of_range: OutOfRangePolicy::default(),
            result_log: default_result_log(),
        }
    }
}

impl PipelineConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TrackError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, TrackError> {
        let config: PipelineConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }
}
