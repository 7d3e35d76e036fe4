use serde::Deserialize;

use crate::error::AlignError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Engine thresholds. Every field has an empirically-tuned default; the
/// glossary thresholds in particular were never derived analytically, so
/// they stay configurable for re-tuning against a labeled sample.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlignConfig {
    #[serde(default)]
    pub glossary: GlossaryConfig,
    #[serde(default)]
    pub positional: PositionalConfig,
}

// ---------------------------------------------------------------------------
// Glossary detection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct GlossaryConfig {
    /// Minimum translation count before whole-artifact detection applies.
    #[serde(default = "default_min_records")]
    pub min_records: usize,
    /// Fraction of gloss-shaped records required to classify the artifact.
    #[serde(default = "default_majority")]
    pub majority: f64,
}

fn default_min_records() -> usize {
    20
}

fn default_majority() -> f64 {
    0.75
}

impl Default for GlossaryConfig {
    fn default() -> Self {
        Self {
            min_records: default_min_records(),
            majority: default_majority(),
        }
    }
}

// ---------------------------------------------------------------------------
// Positional fallback
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct PositionalConfig {
    /// Acceptable band for translation-count / content-line-count.
    #[serde(default = "default_min_ratio")]
    pub min_ratio: f64,
    #[serde(default = "default_max_ratio")]
    pub max_ratio: f64,
}

fn default_min_ratio() -> f64 {
    0.8
}

fn default_max_ratio() -> f64 {
    1.5
}

impl Default for PositionalConfig {
    fn default() -> Self {
        Self {
            min_ratio: default_min_ratio(),
            max_ratio: default_max_ratio(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl AlignConfig {
    pub fn from_toml(input: &str) -> Result<Self, AlignError> {
        let config: AlignConfig =
            toml::from_str(input).map_err(|e| AlignError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AlignError> {
        if self.glossary.min_records == 0 {
            return Err(AlignError::ConfigValidation(
                "glossary.min_records must be at least 1".into(),
            ));
        }
        if !(self.glossary.majority > 0.0 && self.glossary.majority <= 1.0) {
            return Err(AlignError::ConfigValidation(format!(
                "glossary.majority must be in (0, 1], got {}",
                self.glossary.majority
            )));
        }
        if !(self.positional.min_ratio > 0.0) {
            return Err(AlignError::ConfigValidation(format!(
                "positional.min_ratio must be positive, got {}",
                self.positional.min_ratio
            )));
        }
        if self.positional.max_ratio < self.positional.min_ratio {
            return Err(AlignError::ConfigValidation(format!(
                "positional.max_ratio ({}) must be >= min_ratio ({})",
                self.positional.max_ratio, self.positional.min_ratio
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
