//! Validated tuning for a drag scrubber.

use crate::constants::{ACCEL_PX, DEFAULT_MAGNITUDES, SHOW_DELAY};
use smallvec::SmallVec;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("at least one tier magnitude is required")]
    NoTiers,
    #[error("tier magnitude {0} is not a positive finite number")]
    InvalidMagnitude(f64),
    #[error("tier magnitudes must be strictly descending ({prev} then {next})")]
    NotDescending { prev: f64, next: f64 },
    #[error("acceleration divisor {0} must be positive and finite")]
    InvalidAccel(f32),
}

/// Timing, sensitivity and tier layout for one controller.
///
/// Magnitudes are listed top zone first, so they must be strictly descending.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrubConfig {
    show_delay: Duration,
    accel_px: f32,
    magnitudes: SmallVec<[f64; 4]>,
}

impl ScrubConfig {
    pub fn new(
        show_delay: Duration,
        accel_px: f32,
        magnitudes: &[f64],
    ) -> Result<Self, ConfigError> {
        if !(accel_px.is_finite() && accel_px > 0.0) {
            return Err(ConfigError::InvalidAccel(accel_px));
        }
        if magnitudes.is_empty() {
            return Err(ConfigError::NoTiers);
        }
        if let Some(&bad) = magnitudes.iter().find(|m| !(m.is_finite() && **m > 0.0)) {
            return Err(ConfigError::InvalidMagnitude(bad));
        }
        if let Some(pair) = magnitudes.windows(2).find(|w| w[1] >= w[0]) {
            return Err(ConfigError::NotDescending {
                prev: pair[0],
                next: pair[1],
            });
        }
        Ok(Self {
            show_delay,
            accel_px,
            magnitudes: SmallVec::from_slice(magnitudes),
        })
    }

    pub fn show_delay(&self) -> Duration {
        self.show_delay
    }

    pub fn accel_px(&self) -> f32 {
        self.accel_px
    }

    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            show_delay: SHOW_DELAY,
            accel_px: ACCEL_PX,
            magnitudes: SmallVec::from_slice(&DEFAULT_MAGNITUDES),
        }
    }
}
