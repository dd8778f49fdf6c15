//! Command-line transport.
//!
//! Reads a JSON request (or a one-sample-per-line CSV signal), runs one
//! engine call and renders the JSON response.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;

use crate::api::{self, request, ConvolutionRequest, FftRequest, StftRequest};
use crate::config::EngineConfig;
use crate::error::TransformError;
use crate::signal::parse_samples;
use crate::spectrum::WindowType;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "signal-transform")]
#[command(about = "FFT, convolution and STFT over sampled signals", long_about = None)]
pub struct Args {
    /// JSON engine configuration (STFT and convolution defaults)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON response
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Magnitude spectrum: {"samples", "sampleRate"} -> {"freq", "magnitude"}
    Fft(SignalInput),

    /// Full convolution: {"signalA", "signalB"} -> {"samples"}
    Convolve {
        /// JSON request file (stdin when omitted)
        input: Option<PathBuf>,
    },

    /// Spectrogram: {"samples", "sampleRate"} -> {"f", "t", "Zxx"}
    Stft {
        #[command(flatten)]
        signal: SignalInput,

        /// Frame length in samples
        #[arg(long, value_name = "SAMPLES")]
        frame_size: Option<usize>,

        /// Samples shared by consecutive frames
        #[arg(long, value_name = "SAMPLES")]
        overlap: Option<usize>,

        /// Window: hann, hamming, blackman, rectangular
        #[arg(long, value_name = "NAME")]
        window: Option<String>,
    },

    /// Liveness probe
    Health,
}

/// Signal source shared by the single-signal commands
#[derive(clap::Args, Debug)]
pub struct SignalInput {
    /// JSON request file (stdin when omitted)
    pub input: Option<PathBuf>,

    /// Read samples from a one-sample-per-line text file instead
    #[arg(long, value_name = "FILE", conflicts_with = "input", requires = "sample_rate")]
    pub csv: Option<PathBuf>,

    /// Sample rate in Hz for --csv input
    #[arg(long, value_name = "HZ", allow_negative_numbers = true)]
    pub sample_rate: Option<i32>,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Transform(#[from] TransformError),

    #[error("Failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("Failed to render response: {0}")]
    Render(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit status: 2 for rejected input, 1 for everything else
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Transform(err) if err.is_client_error() => 2,
            _ => 1,
        }
    }

    /// JSON error document for stderr
    pub fn to_json(&self) -> String {
        let response = match self {
            CliError::Transform(err) => api::ErrorResponse::from(err),
            other => api::ErrorResponse {
                error: "IoError".to_string(),
                message: other.to_string(),
            },
        };
        serde_json::to_string(&response).unwrap_or_else(|_| self.to_string())
    }
}

impl SignalInput {
    /// (samples, sample_rate) from CSV, or None when a JSON request is expected
    fn csv_signal(&self) -> Result<Option<(Vec<f64>, i32)>, CliError> {
        match (&self.csv, self.sample_rate) {
            (Some(path), Some(sample_rate)) => {
                let text = read_source(Some(path))?;
                Ok(Some((parse_samples(&text), sample_rate)))
            }
            (Some(_), None) => Err(TransformError::InvalidInput(
                "--csv requires --sample-rate".to_string(),
            )
            .into()),
            (None, _) => Ok(None),
        }
    }

    fn fft_request(&self) -> Result<FftRequest, CliError> {
        if let Some((samples, sample_rate)) = self.csv_signal()? {
            return Ok(FftRequest { samples, sample_rate });
        }
        Ok(request::parse(&read_source(self.input.as_deref())?)?)
    }

    fn stft_request(&self) -> Result<StftRequest, CliError> {
        if let Some((samples, sample_rate)) = self.csv_signal()? {
            return Ok(StftRequest {
                samples,
                sample_rate,
                frame_size: None,
                overlap: None,
                window: None,
            });
        }
        Ok(request::parse(&read_source(self.input.as_deref())?)?)
    }
}

/// Read a file, or stdin when no path is given
fn read_source(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.display().to_string(),
            source,
        }),
        None => io::read_to_string(io::stdin()).map_err(|source| CliError::Read {
            path: "<stdin>".to_string(),
            source,
        }),
    }
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig, CliError> {
    match path {
        Some(path) => Ok(EngineConfig::from_json(&read_source(Some(path))?)?),
        None => Ok(EngineConfig::default()),
    }
}

fn render<T: Serialize>(response: &T, pretty: bool) -> Result<String, CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    Ok(text)
}

/// Execute the parsed command and return the rendered response
pub fn run(args: &Args) -> Result<String, CliError> {
    let config = load_config(args.config.as_deref())?;

    match &args.command {
        Command::Fft(signal) => render(&signal.fft_request()?.handle(&config)?, args.pretty),
        Command::Convolve { input } => {
            let request: ConvolutionRequest = request::parse(&read_source(input.as_deref())?)?;
            render(&request.handle(&config)?, args.pretty)
        }
        Command::Stft {
            signal,
            frame_size,
            overlap,
            window,
        } => {
            let mut request = signal.stft_request()?;
            if frame_size.is_some() {
                request.frame_size = *frame_size;
            }
            if overlap.is_some() {
                request.overlap = *overlap;
            }
            if let Some(name) = window {
                let window = WindowType::from_name(name).ok_or_else(|| {
                    TransformError::InvalidInput(format!("unknown window type '{}'", name))
                })?;
                request.window = Some(window);
            }
            render(&request.handle(&config)?, args.pretty)
        }
        Command::Health => render(&api::health(), args.pretty),
    }
}
