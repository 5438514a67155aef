use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::store::CapacityLimits;

/// Configuration from recicla.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: CapacityLimits,
    #[serde(default)]
    pub assets: AssetConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Root directory of the informational text files
    #[serde(default = "default_asset_dir")]
    pub dir: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        AssetConfig {
            dir: default_asset_dir(),
        }
    }
}

fn default_asset_dir() -> String {
    "assets".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show navigation hints in the footer on menu screens
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex overrides for theme slots, e.g. `highlight_bg = "#00AACC"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}
