//! Request payloads accepted from the transport layer
//!
//! Wire names follow the web client: `samples`, `sampleRate`, `signalA`,
//! `signalB`. Malformed documents and mismatched types are rejected as
//! invalid input before any numeric work starts.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::StftConfig;
use crate::error::{Result, TransformError};
use crate::spectrum::windows::WindowType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FftRequest {
    pub samples: Vec<f64>,
    pub sample_rate: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvolutionRequest {
    pub signal_a: Vec<f64>,
    pub signal_b: Vec<f64>,
}

/// STFT request; frame parameters override the configured defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StftRequest {
    pub samples: Vec<f64>,
    pub sample_rate: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlap: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowType>,
}

impl StftRequest {
    /// Effective STFT configuration for this request
    ///
    /// An overridden frame size without an explicit overlap falls back to
    /// half the new frame size, not the base overlap.
    pub fn config(&self, base: &StftConfig) -> StftConfig {
        let mut config = base.clone();

        if let Some(frame_size) = self.frame_size {
            config.frame_size = frame_size;
            config.overlap = None;
        }
        if let Some(overlap) = self.overlap {
            config.overlap = Some(overlap);
        }
        if let Some(window) = self.window {
            config.window = window;
        }

        config
    }
}

/// Decode a JSON request document
///
/// # Errors
/// `InvalidInput` describing the first syntax or type problem
pub fn parse<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text)
        .map_err(|e| TransformError::InvalidInput(format!("malformed request: {}", e)))
}
