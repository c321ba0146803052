use crate::config::PipelineConfig;
use crate::coordinates::{load_track, track_to_ecef};
use crate::errors::TrackError;
use crate::models::{EcefSample, Track};
use crate::numerics::{build_interpolant, Interpolant};
use crate::physics::ecef_velocity_from_samples;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Result of one velocity query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityReport {
    pub time_request: f64, // Unix epoch [s]
    pub velocity: f64,     // [m/s]
}

impl fmt::Display for VelocityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Velocity(time={}seconds) = {} m/s",
            self.time_request, self.velocity
        )
    }
}

/// Destination for produced reports
pub trait ReportSink {
    fn record(&mut self, report: &VelocityReport) -> Result<(), TrackError>;
}

/// Appends each report to a text file, blank-line separated.
#[derive(Debug, Clone)]
pub struct AppendFileSink {
    path: PathBuf,
}

impl AppendFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for AppendFileSink {
    fn record(&mut self, report: &VelocityReport) -> Result<(), TrackError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        write!(file, "\n{}\n", report)?;
        Ok(())
    }
}

/// Times, ECEF positions and speeds of one track, index aligned.
pub struct VelocityProfile {
    times: Vec<f64>,
    positions: Vec<EcefSample>,
    velocity: Vec<f64>,
    interpolant: Box<dyn Interpolant>,
}

impl VelocityProfile {
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn positions(&self) -> &[EcefSample] {
        &self.positions
    }

    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }
}

impl fmt::Debug for VelocityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VelocityProfile")
            .field("samples", &self.times.len())
            .field("domain", &self.interpolant.domain())
            .finish()
    }
}

/// Load, convert, differentiate and interpolate a track in one pass.
#[derive(Debug, Clone, Default)]
pub struct VelocityPipeline {
    config: PipelineConfig,
}

impl VelocityPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The file sink configured by `result_log`, if any
    pub fn result_sink(&self) -> Option<AppendFileSink> {
        self.config.result_log.as_ref().map(AppendFileSink::new)
    }

    pub fn profile(&self, track: &Track) -> Result<VelocityProfile, TrackError> {
        let times = track.times();
        let positions = track_to_ecef(track, &self.config.ellipsoid)?;
        log::debug!("Converted {} samples to ECEF", positions.len());

        let velocity = ecef_velocity_from_samples(&times, &positions)?;
        let interpolant = build_interpolant(self.config.interpolation, &times, &velocity)?;
        log::debug!(
            "Built {:?} interpolant over {:?}",
            self.config.interpolation,
            interpolant.domain()
        );

        Ok(VelocityProfile {
            times,
            positions,
            velocity,
            interpolant,
        })
    }

    pub fn velocity_at(
        &self,
        profile: &VelocityProfile,
        time_request: f64,
    ) -> Result<VelocityReport, TrackError> {
        let velocity = profile
            .interpolant
            .evaluate_checked(time_request, self.config.out_of_range)?;
        let report = VelocityReport {
            time_request,
            velocity,
        };
        log::info!("{}", report);
        Ok(report)
    }

    pub fn query(&self, track: &Track, time_request: f64) -> Result<VelocityReport, TrackError> {
        let profile = self.profile(track)?;
        self.velocity_at(&profile, time_request)
    }

    /// Loads `path` once and answers every requested time in order.
    pub fn query_file(
        &self,
        path: impl AsRef<Path>,
        time_requests: &[f64],
    ) -> Result<Vec<VelocityReport>, TrackError> {
        let track = load_track(path)?;
        if let Some(first) = track.samples().first() {
            log::debug!("Track starts at {}", first.epoch());
        }
        let profile = self.profile(&track)?;
        time_requests
            .iter()
            .map(|&t| self.velocity_at(&profile, t))
            .collect()
    }

    /// Runs [`query_file`](Self::query_file) and hands each report to `sink`.
    pub fn query_file_into(
        &self,
        path: impl AsRef<Path>,
        time_requests: &[f64],
        sink: &mut dyn ReportSink,
    ) -> Result<Vec<VelocityReport>, TrackError> {
        let reports = self.query_file(path, time_requests)?;
        for report in &reports {
            sink.record(report)?;
        }
        Ok(reports)
    }
}
