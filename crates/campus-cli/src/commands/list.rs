use anyhow::Context;
use campus_catalog::CatalogSnapshot;
use campus_core::entities::Institution;
use campus_query::{QueryState, Summary, View, search_with_summary};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::context::AppContext;
use crate::output::{Tabular, output};

#[derive(Debug, Serialize)]
struct ListResponse<'a> {
    view: View,
    query: QueryState,
    summary: Summary,
    institutions: Vec<&'a Institution>,
}

impl Tabular for ListResponse<'_> {
    fn headers(&self) -> Vec<&'static str> {
        vec!["id", "name", "location", "country", "rating", "tuition", "programs"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.institutions
            .iter()
            .map(|institution| {
                vec![
                    institution.id.clone(),
                    institution.name.clone(),
                    institution.location.clone(),
                    institution.country.clone(),
                    format!("{:.1}", institution.rating),
                    institution.tuition_fee.clone(),
                    institution.programs.len().to_string(),
                ]
            })
            .collect()
    }

    fn caption(&self) -> Option<String> {
        let noun = if self.summary.count == 1 {
            "institution"
        } else {
            "institutions"
        };
        Some(format!(
            "{} {noun} found | {} countries | {} programs",
            self.summary.count, self.summary.distinct_countries, self.summary.total_programs
        ))
    }

    fn empty_message(&self) -> &'static str {
        "No colleges found. Try adjusting your search or filter."
    }
}

/// Handle `campus list`.
pub fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.store.snapshot();
    let response = build_response(args, &ctx.config.general.default_view, &snapshot)?;
    output(&response, flags.format)
}

fn build_response<'a>(
    args: &ListArgs,
    default_view: &str,
    snapshot: &'a CatalogSnapshot,
) -> anyhow::Result<ListResponse<'a>> {
    let view_name = args.view.as_deref().unwrap_or(default_view);
    let view: View = view_name
        .parse()
        .with_context(|| format!("invalid --view '{view_name}'"))?;
    let query = QueryState::new(args.search.clone(), args.filter.as_str());

    let candidates = match view.category() {
        Some(category) => snapshot.by_category(category),
        None => snapshot.all().iter().collect(),
    };
    let (institutions, summary) = search_with_summary(candidates, view, &query);
    tracing::debug!(%view, filter = %query.filter, matched = summary.count, "catalog query");

    Ok(ListResponse {
        view,
        query,
        summary,
        institutions,
    })
}
