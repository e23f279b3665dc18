//! Tempo factor and ffmpeg `atempo` filter chain

use crate::error::{TempoError, Result};

/// Range a single `atempo` stage accepts on every ffmpeg release.
pub const ATEMPO_MIN: f64 = 0.5;
pub const ATEMPO_MAX: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempoFactor(f64);

impl TempoFactor {
    /// `12.0` percent becomes a factor of `1.12`.
    pub fn from_percent(percent: f64) -> Result<Self> {
        Self::new(1.0 + percent / 100.0)
    }

    pub fn new(factor: f64) -> Result<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(TempoError::config(format!("Tempo factor must be a positive number, got {}", factor)));
        }
        Ok(Self(factor))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Split the factor into stages inside `[ATEMPO_MIN, ATEMPO_MAX]` whose product is the factor.
    pub fn stages(&self) -> Vec<f64> {
        let mut stages = Vec::new();
        let mut remaining = self.0;

        while remaining > ATEMPO_MAX {
            stages.push(ATEMPO_MAX);
            remaining /= ATEMPO_MAX;
        }
        while remaining < ATEMPO_MIN {
            stages.push(ATEMPO_MIN);
            remaining /= ATEMPO_MIN;
        }

        stages.push(remaining);
        stages
    }

    /// Filter graph for `-filter:a`, e.g. `atempo=1.12` or `atempo=2,atempo=1.5`.
    pub fn filter(&self) -> String {
        self.stages()
            .iter()
            .map(|stage| format!("atempo={}", stage))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl std::fmt::Display for TempoFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
