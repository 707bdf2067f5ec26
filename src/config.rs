//! Configuration for palette extraction, scoring and recommendation requests
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use room_palette::MatcherConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = MatcherConfig::from_json_file(Path::new("matcher.json"))?;
//!
//! // Or use defaults
//! let config = MatcherConfig::default();
//! # Ok::<(), room_palette::MatchError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`ScoringConfig`]: compatibility score weights
//! - [`ExtractionConfig`]: dominant palette sampling and de-duplication
//! - [`RecommendationConfig`]: candidate cap and furniture category table
//!
//! The color naming thresholds and keyword vocabularies are fixed and not
//! part of the configuration.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    constants::{extraction, recommendation, scoring},
    MatchError, Result,
};

/// Complete matcher configuration
///
/// Missing sections or fields in a JSON file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Score weights
    pub scoring: ScoringConfig,

    /// Palette extraction parameters
    pub extraction: ExtractionConfig,

    /// Request handling parameters
    pub recommendation: RecommendationConfig,
}

/// Compatibility score weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Added when category or name contains the furniture type
    pub category_bonus: u32,

    /// Matched color at index `i` of `n` detected colors adds `(n - i) * color_weight`
    pub color_weight: u32,

    /// Added when the product text mentions a neutral color
    pub neutral_bonus: u32,

    /// Flat score of requirement-driven matches
    pub requirement_base_score: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            category_bonus: scoring::CATEGORY_BONUS,
            color_weight: scoring::COLOR_WEIGHT,
            neutral_bonus: scoring::NEUTRAL_BONUS,
            requirement_base_score: scoring::REQUIREMENT_BASE_SCORE,
        }
    }
}

/// Dominant palette extraction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Pixel stride on both axes
    pub sample_step: u32,

    /// Channel quantization step
    pub quantization_step: u8,

    /// Pixels with lower alpha are ignored
    pub min_alpha: u8,

    /// Minimum Euclidean RGB distance between returned colors (exclusive)
    pub distance_threshold: f64,

    /// Maximum number of returned colors
    pub max_colors: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            sample_step: extraction::SAMPLE_STEP,
            quantization_step: extraction::QUANTIZATION_STEP,
            min_alpha: extraction::MIN_ALPHA,
            distance_threshold: extraction::DISTANCE_THRESHOLD,
            max_colors: extraction::MAX_COLORS,
        }
    }
}

/// Recommendation request parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Maximum catalog candidates handed to the matcher
    pub candidate_limit: usize,

    /// Furniture keyword to catalog category slug; unmapped keywords pass through
    pub category_map: BTreeMap<String, String>,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            candidate_limit: recommendation::CANDIDATE_LIMIT,
            category_map: recommendation::CATEGORY_MAP
                .iter()
                .map(|(keyword, slug)| (keyword.to_string(), slug.to_string()))
                .collect(),
        }
    }
}

impl MatcherConfig {
    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| MatchError::config("Invalid configuration JSON", e))
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MatchError::config(format!("Failed to read {}", path.display()), e)
        })?;
        Self::from_json_str(&content)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| MatchError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            MatchError::config(format!("Failed to write {}", path.display()), e)
        })
    }
}
