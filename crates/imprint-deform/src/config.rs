//! Deformer configuration.
//!
//! The scalar attributes every collision deformer exposes: global
//! envelope, post-smoothing iterations and the bulge controls.

use imprint_types::constants::{DEFAULT_BULGE_STRENGTH, MAX_BULGE_STRENGTH, MAX_SMOOTH_ITERATIONS};
use imprint_types::{ImprintError, ImprintResult};
use serde::{Deserialize, Serialize};

/// Typed per-instance deformer parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeformerConfig {
    /// Global blend in `[0, 1]`. Zero short-circuits the evaluation.
    pub envelope: f32,

    /// Post-smoothing iterations over displaced vertices (0–5).
    pub smooth_iterations: u32,

    /// Reach of the bulge ripple around a collision (world units).
    /// Zero disables the bulge pass.
    pub bulge_distance: f32,

    /// Bulge magnitude multiplier (0–10).
    pub bulge_strength: f32,
}

impl Default for DeformerConfig {
    fn default() -> Self {
        Self {
            envelope: 1.0,
            smooth_iterations: 0,
            bulge_distance: 0.0,
            bulge_strength: DEFAULT_BULGE_STRENGTH,
        }
    }
}

impl DeformerConfig {
    /// A gentle bulge with one round of smoothing.
    pub fn soft_bulge() -> Self {
        Self {
            smooth_iterations: 1,
            bulge_distance: 0.5,
            bulge_strength: 1.0,
            ..Default::default()
        }
    }

    /// Checks every field against its attribute range.
    pub fn validate(&self) -> ImprintResult<()> {
        if !(0.0..=1.0).contains(&self.envelope) {
            return Err(ImprintError::InvalidConfig(format!(
                "envelope must be in [0, 1], got {}",
                self.envelope
            )));
        }
        if self.smooth_iterations > MAX_SMOOTH_ITERATIONS {
            return Err(ImprintError::InvalidConfig(format!(
                "smooth_iterations must be at most {MAX_SMOOTH_ITERATIONS}, got {}",
                self.smooth_iterations
            )));
        }
        if self.bulge_distance.is_nan() || self.bulge_distance < 0.0 {
            return Err(ImprintError::InvalidConfig(format!(
                "bulge_distance must be >= 0, got {}",
                self.bulge_distance
            )));
        }
        if !(0.0..=MAX_BULGE_STRENGTH).contains(&self.bulge_strength) {
            return Err(ImprintError::InvalidConfig(format!(
                "bulge_strength must be in [0, {MAX_BULGE_STRENGTH}], got {}",
                self.bulge_strength
            )));
        }
        Ok(())
    }

    /// Copy with every field forced into range, the way the host UI
    /// clamps attribute edits. NaN falls back to the default.
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();
        let clamp = |v: f32, lo: f32, hi: f32, fallback: f32| {
            if v.is_nan() {
                fallback
            } else {
                v.clamp(lo, hi)
            }
        };
        Self {
            envelope: clamp(self.envelope, 0.0, 1.0, defaults.envelope),
            smooth_iterations: self.smooth_iterations.min(MAX_SMOOTH_ITERATIONS),
            bulge_distance: clamp(self.bulge_distance, 0.0, f32::MAX, defaults.bulge_distance),
            bulge_strength: clamp(
                self.bulge_strength,
                0.0,
                MAX_BULGE_STRENGTH,
                defaults.bulge_strength,
            ),
        }
    }

    /// Returns true if the bulge pass can run at all.
    #[inline]
    pub fn bulge_enabled(&self) -> bool {
        self.bulge_distance != 0.0 && self.bulge_strength != 0.0
    }
}
