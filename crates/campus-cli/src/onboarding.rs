//! The persisted onboarding-completed flag.
//!
//! Stored as `onboarding.json` under the configured state directory. A
//! missing or unreadable file means onboarding has not been completed.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const FILE_NAME: &str = "onboarding.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingState {
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Reads and writes the flag file in one directory.
#[derive(Debug, Clone)]
pub struct OnboardingFlag {
    path: PathBuf,
}

impl OnboardingFlag {
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(FILE_NAME),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current state; read failures degrade to "not completed".
    #[must_use]
    pub fn load(&self) -> OnboardingState {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return OnboardingState::default();
            }
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "failed to read onboarding flag");
                return OnboardingState::default();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|error| {
            tracing::warn!(path = %self.path.display(), %error, "ignoring malformed onboarding flag");
            OnboardingState::default()
        })
    }

    /// Persist `completed`, stamping the time when it becomes true.
    pub fn set(&self, completed: bool) -> anyhow::Result<OnboardingState> {
        let state = OnboardingState {
            completed,
            completed_at: completed.then(Utc::now),
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&state)?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(state)
    }
}
