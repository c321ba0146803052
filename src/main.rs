use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use trackvel::config::{InterpolationMethod, OutOfRangePolicy, PipelineConfig};
use trackvel::{ReportSink, TrackError, VelocityPipeline};

#[derive(Parser)]
#[command(name = "trackvel")]
#[command(about = "Interpolate ECEF speed along a geodetic track")]
struct Cli {
    /// CSV file with time,latitude,longitude,altitude columns
    file: PathBuf,
    /// Query times [Unix seconds]
    #[arg(required = true, allow_negative_numbers = true)]
    times: Vec<f64>,
    /// YAML pipeline configuration
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum)]
    method: Option<Method>,
    /// Extrapolate instead of failing outside the track span
    #[arg(long)]
    extrapolate: bool,
    /// Result log to append to
    #[arg(long, conflicts_with = "no_log")]
    log: Option<PathBuf>,
    /// Do not append results to any file
    #[arg(long)]
    no_log: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Method {
    Linear,
    Cubic,
}

impl From<Method> for InterpolationMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Linear => InterpolationMethod::Linear,
            Method::Cubic => InterpolationMethod::NaturalCubicSpline,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), TrackError> {
    let mut config = match &cli.config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(method) = cli.method {
        config.interpolation = method.into();
    }
    if cli.extrapolate {
        config.out_of_range = OutOfRangePolicy::Extrapolate;
    }
    if let Some(log) = &cli.log {
        config.result_log = Some(log.clone());
    }
    if cli.no_log {
        config.result_log = None;
    }

    let pipeline = VelocityPipeline::new(config);
    let reports = pipeline.query_file(&cli.file, &cli.times)?;

    let mut sink = pipeline.result_sink();
    for report in &reports {
        println!("{}", report);
        if let Some(sink) = sink.as_mut() {
            sink.record(report)?;
        }
    }
    Ok(())
}
