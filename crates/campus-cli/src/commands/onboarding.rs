use anyhow::Context;
use campus_config::CampusConfig;
use serde::Serialize;

use crate::cli::{GlobalFlags, OnboardingCommands};
use crate::onboarding::{OnboardingFlag, OnboardingState};
use crate::output::{Tabular, output};

#[derive(Debug, Serialize)]
struct OnboardingResponse {
    #[serde(flatten)]
    state: OnboardingState,
    path: String,
}

impl Tabular for OnboardingResponse {
    fn headers(&self) -> Vec<&'static str> {
        vec!["completed", "completed_at", "path"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.state.completed.to_string(),
            self.state
                .completed_at
                .map_or_else(|| "-".to_string(), |at| at.to_rfc3339()),
            self.path.clone(),
        ]]
    }
}

/// Handle `campus onboarding <action>`. Needs no catalog.
pub fn handle(
    action: &OnboardingCommands,
    config: &CampusConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let dir = config
        .general
        .resolved_state_dir()
        .context("no state directory available; set general.state_dir")?;
    let flag = OnboardingFlag::in_dir(&dir);

    let state = match action {
        OnboardingCommands::Status => flag.load(),
        OnboardingCommands::Complete => flag.set(true)?,
        OnboardingCommands::Reset => flag.set(false)?,
    };

    let response = OnboardingResponse {
        state,
        path: flag.path().display().to_string(),
    };
    output(&response, flags.format)
}
