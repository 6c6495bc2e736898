use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BRIGHTNESS_LEVELS, DEFAULT_MIN_BRIGHTNESS, DEFAULT_PROFILE_DIR};
use crate::layout::ProfileLayout;
use crate::locate::MatchPolicy;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Directory scanned for the base profile.
    #[serde(default = "default_search_dir")]
    pub search_dir: PathBuf,
    /// Where derived profiles are written. Defaults to `search_dir`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Brightness fractions to generate, in order.
    #[serde(default = "default_levels")]
    pub levels: Vec<f64>,
    #[serde(default = "default_min_brightness")]
    pub min_brightness: f64,
    #[serde(default)]
    pub match_policy: MatchPolicy,
    #[serde(default)]
    pub layout: ProfileLayout,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            search_dir: default_search_dir(),
            output_dir: None,
            levels: default_levels(),
            min_brightness: default_min_brightness(),
            match_policy: MatchPolicy::default(),
            layout: ProfileLayout::default(),
        }
    }
}

fn default_search_dir() -> PathBuf {
    PathBuf::from(DEFAULT_PROFILE_DIR)
}

fn default_levels() -> Vec<f64> {
    DEFAULT_BRIGHTNESS_LEVELS.to_vec()
}

fn default_min_brightness() -> f64 {
    DEFAULT_MIN_BRIGHTNESS
}
