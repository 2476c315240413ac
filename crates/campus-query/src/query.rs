//! Filtering and aggregate statistics over an institution collection.
//!
//! Everything here is a pure function of its arguments: no I/O, no shared
//! state, safe to call on every keystroke.

use std::collections::HashSet;

use campus_core::entities::Institution;
use serde::{Deserialize, Serialize};

use crate::filters::{FilterKey, View, country_for_key};

/// Per-screen query input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryState {
    /// Free text; empty matches everything.
    #[serde(default)]
    pub search: String,
    /// Structured filter; `all` matches everything.
    #[serde(default)]
    pub filter: FilterKey,
}

impl QueryState {
    #[must_use]
    pub fn new(search: impl Into<String>, filter: impl Into<FilterKey>) -> Self {
        Self {
            search: search.into(),
            filter: filter.into(),
        }
    }
}

/// Aggregates shown beside a filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub count: usize,
    pub distinct_countries: usize,
    /// Sum of program counts; repeated program names all count.
    pub total_programs: usize,
}

/// Institutions matching both the free-text and the structured filter,
/// in input order.
///
/// Never fails: an unknown country key in [`View::International`] yields an
/// empty result.
pub fn search<'a, I>(items: I, view: View, query: &QueryState) -> Vec<&'a Institution>
where
    I: IntoIterator<Item = &'a Institution>,
{
    let structured = StructuredFilter::new(view, &query.filter);
    items
        .into_iter()
        .filter(|institution| {
            institution.matches_text(&query.search) && structured.matches(institution)
        })
        .collect()
}

/// Count, distinct countries, and total programs over `items`.
pub fn summarize<'a, I>(items: I) -> Summary
where
    I: IntoIterator<Item = &'a Institution>,
{
    let mut countries = HashSet::new();
    let mut summary = Summary::default();
    for institution in items {
        summary.count += 1;
        summary.total_programs += institution.programs.len();
        countries.insert(institution.country.as_str());
    }
    summary.distinct_countries = countries.len();
    summary
}

/// [`search`] followed by [`summarize`] over the same result.
pub fn search_with_summary<'a, I>(
    items: I,
    view: View,
    query: &QueryState,
) -> (Vec<&'a Institution>, Summary)
where
    I: IntoIterator<Item = &'a Institution>,
{
    let results = search(items, view, query);
    let summary = summarize(results.iter().copied());
    (results, summary)
}

/// A structured filter resolved once per query.
enum StructuredFilter {
    Any,
    Country(&'static str),
    Program(String),
    Nothing,
}

impl StructuredFilter {
    fn new(view: View, key: &FilterKey) -> Self {
        let FilterKey::Key(key) = key else {
            return Self::Any;
        };
        match (view, country_for_key(key)) {
            (View::International | View::All, Some(country)) => Self::Country(country),
            (View::International, None) => Self::Nothing,
            (View::Local | View::All, _) => Self::Program(key.to_lowercase()),
        }
    }

    fn matches(&self, institution: &Institution) -> bool {
        match self {
            Self::Any => true,
            Self::Country(country) => institution.country == *country,
            Self::Program(keyword) => institution.offers_program(keyword),
            Self::Nothing => false,
        }
    }
}
