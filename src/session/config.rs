use std::path::Path;

use crate::{
    eval::degeneracy::DegeneracyCheck,
    foundation::core::Canvas,
    foundation::error::{EruptionError, EruptionResult},
    foundation::math::ColorMode,
    mutate::mutator::{DEFAULT_MAX_DEPTH, Mutator},
    mutate::retry::{DEFAULT_MAX_ATTEMPTS, ExhaustedPolicy, RetryPolicy},
};

/// Largest accepted `max_depth`. Tree size grows exponentially with it.
pub const MAX_DEPTH_LIMIT: usize = 16;

/// Engine settings, loadable from JSON.
///
/// Every field is optional in JSON; missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// RNG seed. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Deepest tree level the mutator rewrites.
    pub max_depth: usize,
    /// Mutation attempts per interaction before giving up.
    pub max_attempts: u32,
    /// Equality test for corner samples.
    pub degeneracy: DegeneracyCheck,
    /// Fallback when every attempt was flat.
    pub on_exhausted: ExhaustedPolicy,
    /// Float-to-byte conversion for color channels.
    pub color_mode: ColorMode,
    /// Size of the rendered image.
    pub canvas: Canvas,
    /// Top fraction of the screen where a press means "reset".
    pub reset_region: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_depth: DEFAULT_MAX_DEPTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            degeneracy: DegeneracyCheck::default(),
            on_exhausted: ExhaustedPolicy::default(),
            color_mode: ColorMode::default(),
            canvas: Canvas::default(),
            reset_region: 0.25,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> EruptionResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| EruptionError::config(format!("parse engine config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: &Path) -> EruptionResult<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| EruptionError::config(format!("read '{}': {e}", path.display())))?;
        Self::from_json_str(&s)
    }

    /// Check ranges that serde cannot express.
    pub fn validate(&self) -> EruptionResult<()> {
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(EruptionError::validation(format!(
                "max_depth must be <= {MAX_DEPTH_LIMIT}, got {}",
                self.max_depth
            )));
        }
        if self.max_attempts == 0 {
            return Err(EruptionError::validation("max_attempts must be >= 1"));
        }
        if !(self.reset_region > 0.0 && self.reset_region < 1.0) {
            return Err(EruptionError::validation(format!(
                "reset_region must be in (0, 1), got {}",
                self.reset_region
            )));
        }
        self.canvas.validate()
    }

    /// Mutator configured with `max_depth`.
    pub fn mutator(&self) -> Mutator {
        Mutator::new(self.max_depth)
    }

    /// Retry policy assembled from the relevant fields.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            check: self.degeneracy,
            on_exhausted: self.on_exhausted,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
