use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PulseError, Result};
use crate::prioritize::{PrioritizationEngine, PrioritizationWeights};
use crate::sentiment::{Lexicon, LexiconOverrides, SentimentScorer};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "featurepulse.yaml";

/// Runtime configuration. Every field is optional in the YAML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    /// Weights for the composite priority score.
    pub weights: PrioritizationWeights,
    /// Words added to the bundled sentiment lexicon.
    pub lexicon: LexiconOverrides,
    /// How many reasons to show per feature in text output.
    pub reasons_shown: usize,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            weights: PrioritizationWeights::default(),
            lexicon: LexiconOverrides::default(),
            reasons_shown: 3,
        }
    }
}

impl PulseConfig {
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file is valid and means all defaults.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PulseError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `explicit` if given, else `featurepulse.yaml` in `dir` if present,
    /// else defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `key=value` weight overrides on top of the configured weights.
    pub fn with_weight_overrides(mut self, overrides: &[String]) -> Result<Self> {
        for entry in overrides {
            self.weights.apply_override(entry)?;
        }
        Ok(self)
    }

    pub fn scorer(&self) -> SentimentScorer {
        SentimentScorer::new(Lexicon::default().with_overrides(&self.lexicon))
    }

    pub fn engine(&self) -> PrioritizationEngine {
        PrioritizationEngine::new(self.weights)
    }
}
