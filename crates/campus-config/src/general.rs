//! General application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_view() -> String {
    "all".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// View used by `campus list` when `--view` is omitted
    /// (`local`, `international`, or `all`).
    #[serde(default = "default_view")]
    pub default_view: String,

    /// Directory for persisted state (the onboarding flag).
    /// Empty means the platform data directory.
    #[serde(default)]
    pub state_dir: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_view: default_view(),
            state_dir: String::new(),
        }
    }
}

impl GeneralConfig {
    /// Resolve the state directory, falling back to `<data_dir>/campus`.
    #[must_use]
    pub fn resolved_state_dir(&self) -> Option<PathBuf> {
        if self.state_dir.is_empty() {
            dirs::data_dir().map(|p| p.join("campus"))
        } else {
            Some(PathBuf::from(&self.state_dir))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_view, "all");
        assert!(config.state_dir.is_empty());
    }

    #[test]
    fn explicit_state_dir_wins() {
        let config = GeneralConfig {
            state_dir: "/tmp/campus-state".into(),
            ..Default::default()
        };
        assert_eq!(
            config.resolved_state_dir(),
            Some(PathBuf::from("/tmp/campus-state"))
        );
    }
}
