//! # campus-query
//!
//! Pure catalog queries for Campus.
//!
//! Given a collection of institutions and a [`QueryState`], [`search`]
//! applies a case-insensitive substring match over name, location, country,
//! and programs, ANDed with one structured filter whose meaning depends on
//! the [`View`]:
//! - local: program keyword (`engineering` matches "Software Engineering")
//! - international: country code from [`COUNTRY_FILTERS`]; unknown codes match nothing
//!
//! [`summarize`] derives the aggregate cards from whatever collection it is
//! given, normally the output of [`search`].
//!
//! `search` does not restrict by category: callers pass the partition they
//! are displaying.

mod filters;
mod query;

pub use filters::{
    ALL_KEY, COUNTRY_FILTERS, FilterKey, FilterOption, PROGRAM_FILTERS, View, country_for_key,
    filter_options,
};
pub use query::{QueryState, Summary, search, search_with_summary, summarize};
