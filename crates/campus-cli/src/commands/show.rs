use campus_catalog::CatalogSnapshot;
use campus_core::entities::Institution;
use campus_core::validation::find_by_id;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::context::AppContext;
use crate::output::{Tabular, output};

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct ShowResponse<'a> {
    institution: &'a Institution,
}

impl Tabular for ShowResponse<'_> {
    fn headers(&self) -> Vec<&'static str> {
        vec!["field", "value"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let i = self.institution;
        [
            ("id", i.id.clone()),
            ("name", i.name.clone()),
            ("category", i.category.to_string()),
            ("location", i.location.clone()),
            ("country", i.country.clone()),
            ("established", i.established_year.to_string()),
            ("rating", format!("{:.1}", i.rating)),
            ("tuition", i.tuition_fee.clone()),
            ("programs", i.programs.join(", ")),
            ("accreditation", i.accreditations.join(", ")),
            ("description", i.description.clone()),
        ]
        .into_iter()
        .map(|(field, value)| vec![field.to_string(), value])
        .collect()
    }
}

/// Handle `campus show <id>`.
pub fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.store.snapshot();
    output(&build_response(args, &snapshot)?, flags.format)
}

fn build_response<'a>(
    args: &ShowArgs,
    snapshot: &'a CatalogSnapshot,
) -> anyhow::Result<ShowResponse<'a>> {
    let institution = find_by_id(snapshot.all(), &args.id)?;
    Ok(ShowResponse { institution })
}
