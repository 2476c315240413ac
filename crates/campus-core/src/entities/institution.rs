use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Category;

/// One college or university record in the catalog.
///
/// Field names on the wire follow the remote catalog endpoint
/// (`type`, `tuitionFee`, `image`, `established`, `accreditation`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    pub id: String,
    pub name: String,
    pub location: String,
    pub country: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub description: String,
    /// Display string, opaque to querying (e.g. `PKR 200,000/year`).
    pub tuition_fee: String,
    /// Author-ordered program names.
    pub programs: Vec<String>,
    pub rating: f64,
    #[serde(rename = "image")]
    pub image_ref: String,
    #[serde(rename = "established")]
    pub established_year: i32,
    #[serde(rename = "accreditation")]
    pub accreditations: Vec<String>,
}

impl Institution {
    /// Free-text match against name, location, country, or any program,
    /// case-insensitively. An empty needle matches everything.
    #[must_use]
    pub fn matches_text(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        contains_lowercase(&self.name, &needle)
            || contains_lowercase(&self.location, &needle)
            || contains_lowercase(&self.country, &needle)
            || self
                .programs
                .iter()
                .any(|program| contains_lowercase(program, &needle))
    }

    /// Whether any program contains `keyword`, case-insensitively.
    ///
    /// Institutions without programs never match.
    #[must_use]
    pub fn offers_program(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.programs
            .iter()
            .any(|program| contains_lowercase(program, &keyword))
    }

    /// Number of programs that contain `keyword`, case-insensitively.
    #[must_use]
    pub fn matching_program_count(&self, keyword: &str) -> usize {
        let keyword = keyword.to_lowercase();
        self.programs
            .iter()
            .filter(|program| contains_lowercase(program, &keyword))
            .count()
    }
}

fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
