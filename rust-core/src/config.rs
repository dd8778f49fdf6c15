//! Configuration parameters for the transform engines

use serde::{Deserialize, Serialize};

use crate::error::{Result, TransformError};
use crate::spectrum::windows::WindowType;

/// Default STFT frame length in samples
pub const DEFAULT_FRAME_SIZE: usize = 256;

/// Default shorter-operand length up to which convolution is evaluated directly
pub const DEFAULT_DIRECT_MAX_TAPS: usize = 64;

/// Handling of the final frame when fewer than `frame_size` samples remain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TailPolicy {
    /// Zero-pad the last partial frame to full length
    #[default]
    ZeroPad,

    /// Only emit frames fully covered by the signal
    Drop,
}

/// STFT configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StftConfig {
    /// Frame length in samples (default: 256)
    pub frame_size: usize,

    /// Samples shared by consecutive frames (default: frame_size / 2)
    pub overlap: Option<usize>,

    /// Taper applied to every frame (default: Hann)
    pub window: WindowType,

    /// Final partial frame policy (default: ZeroPad)
    pub tail: TailPolicy,

    /// Divide magnitudes by the window sum (default: false, raw |X[k]|)
    pub apply_correction: bool,
}

impl Default for StftConfig {
    fn default() -> Self {
        Self {
            frame_size: DEFAULT_FRAME_SIZE,
            overlap: None,
            window: WindowType::Hann,
            tail: TailPolicy::ZeroPad,
            apply_correction: false,
        }
    }
}

impl StftConfig {
    /// Config with the given frame size and the default 50% overlap
    pub fn with_frame_size(frame_size: usize) -> Self {
        Self {
            frame_size,
            ..Self::default()
        }
    }

    /// Effective overlap in samples
    pub fn overlap(&self) -> usize {
        self.overlap.unwrap_or(self.frame_size / 2)
    }

    /// Frame advance in samples
    pub fn hop_size(&self) -> usize {
        self.frame_size.saturating_sub(self.overlap())
    }

    /// Check frame geometry
    ///
    /// # Errors
    /// `InvalidInput` if `frame_size < 2` or `overlap >= frame_size`
    pub fn validate(&self) -> Result<()> {
        if self.frame_size < 2 {
            return Err(TransformError::InvalidInput(format!(
                "frame size must be at least 2 (got {})",
                self.frame_size
            )));
        }

        if self.overlap() >= self.frame_size {
            return Err(TransformError::InvalidInput(format!(
                "overlap ({}) must be smaller than frame size ({})",
                self.overlap(),
                self.frame_size
            )));
        }

        Ok(())
    }
}

/// Convolution algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConvolutionMethod {
    /// Direct for short operands, FFT otherwise
    #[default]
    Auto,

    /// Always O(len(a) * len(b)) direct evaluation
    Direct,

    /// Always FFT-based
    Fft,
}

/// Convolution configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvolutionConfig {
    pub method: ConvolutionMethod,

    /// With `Auto`, direct evaluation is used while the shorter operand has
    /// at most this many samples (default: 64)
    pub direct_max_taps: usize,
}

impl Default for ConvolutionConfig {
    fn default() -> Self {
        Self {
            method: ConvolutionMethod::Auto,
            direct_max_taps: DEFAULT_DIRECT_MAX_TAPS,
        }
    }
}

/// Engine-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub stft: StftConfig,
    pub convolution: ConvolutionConfig,
}

impl EngineConfig {
    /// Parse a JSON config document; missing keys take their defaults
    ///
    /// # Errors
    /// `InvalidInput` on malformed JSON or an invalid STFT geometry
    pub fn from_json(text: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(text)
            .map_err(|e| TransformError::InvalidInput(format!("invalid config: {}", e)))?;
        config.stft.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stft_defaults() {
        let config = StftConfig::default();

        assert_eq!(config.frame_size, 256);
        assert_eq!(config.overlap(), 128);
        assert_eq!(config.hop_size(), 128);
        assert_eq!(config.window, WindowType::Hann);
        assert_eq!(config.tail, TailPolicy::ZeroPad);
        assert!(!config.apply_correction);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_stft_validation() {
        assert!(StftConfig::with_frame_size(1).validate().is_err());

        let config = StftConfig {
            overlap: Some(64),
            ..StftConfig::with_frame_size(64)
        };
        assert!(matches!(config.validate(), Err(TransformError::InvalidInput(_))));

        let config = StftConfig {
            overlap: Some(0),
            ..StftConfig::with_frame_size(2)
        };
        assert_eq!(config.hop_size(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engine_config_from_json() {
        let config = EngineConfig::from_json(
            r#"{"stft": {"frameSize": 512, "window": "hamming", "tail": "drop"},
                "convolution": {"method": "fft"}}"#,
        )
        .unwrap();

        assert_eq!(config.stft.frame_size, 512);
        assert_eq!(config.stft.overlap(), 256);
        assert_eq!(config.stft.window, WindowType::Hamming);
        assert_eq!(config.stft.tail, TailPolicy::Drop);
        assert_eq!(config.convolution.method, ConvolutionMethod::Fft);
        assert_eq!(config.convolution.direct_max_taps, 64);
    }

    #[test]
    fn test_engine_config_rejects_bad_input() {
        assert!(EngineConfig::from_json("{").is_err());
        assert!(EngineConfig::from_json(r#"{"stft": {"frameSize": 8, "overlap": 8}}"#).is_err());
        assert_eq!(EngineConfig::from_json("{}").unwrap(), EngineConfig::default());
    }
}
