use anyhow::Context;
use campus_query::{FilterOption, View, filter_options};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FiltersArgs;
use crate::output::{Tabular, output};

#[derive(Debug, Serialize)]
struct FiltersResponse {
    view: View,
    filters: Vec<FilterOption>,
}

impl Tabular for FiltersResponse {
    fn headers(&self) -> Vec<&'static str> {
        vec!["key", "label"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.filters
            .iter()
            .map(|option| vec![option.key.to_string(), option.label.to_string()])
            .collect()
    }
}

/// Handle `campus filters`. Needs no catalog.
pub fn handle(args: &FiltersArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view: View = args
        .view
        .parse()
        .with_context(|| format!("invalid --view '{}'", args.view))?;
    let response = FiltersResponse {
        view,
        filters: filter_options(view),
    };
    output(&response, flags.format)
}
