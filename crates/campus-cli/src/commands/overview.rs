use campus_catalog::{CatalogSnapshot, DataOrigin};
use campus_query::summarize;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{Tabular, output};

#[derive(Debug, Serialize)]
struct OverviewResponse {
    total: usize,
    local: usize,
    international: usize,
    countries: usize,
    programs: usize,
    origin: DataOrigin,
    error: Option<String>,
}

impl Tabular for OverviewResponse {
    fn headers(&self) -> Vec<&'static str> {
        vec!["category", "institutions"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![
            vec!["local".to_string(), self.local.to_string()],
            vec!["international".to_string(), self.international.to_string()],
            vec!["total".to_string(), self.total.to_string()],
        ]
    }

    fn caption(&self) -> Option<String> {
        let source = match self.origin {
            DataOrigin::Remote => "remote catalog",
            DataOrigin::Fallback => "bundled catalog",
            DataOrigin::Empty => "no catalog",
        };
        let caption = format!(
            "{} institutions in {} countries, {} programs ({source})",
            self.total, self.countries, self.programs
        );
        Some(match &self.error {
            Some(error) => format!("{caption}\nnote: {error}"),
            None => caption,
        })
    }
}

/// Handle `campus overview`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.store.snapshot();
    output(&build_response(&snapshot), flags.format)
}

fn build_response(snapshot: &CatalogSnapshot) -> OverviewResponse {
    let summary = summarize(snapshot.all());
    OverviewResponse {
        total: summary.count,
        local: snapshot.local().len(),
        international: snapshot.international().len(),
        countries: summary.distinct_countries,
        programs: summary.total_programs,
        origin: snapshot.status.origin,
        error: snapshot.status.error.clone(),
    }
}
