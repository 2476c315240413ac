//! Structured filter keys and their lookup tables.

use std::fmt;
use std::str::FromStr;

use campus_core::enums::Category;
use campus_core::errors::CoreError;
use serde::{Deserialize, Serialize};

/// Sentinel key meaning "no structured filter".
pub const ALL_KEY: &str = "all";

/// A selectable filter: machine key plus display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub key: &'static str,
    pub label: &'static str,
}

/// Country keys offered by the international view, mapped to the exact
/// `country` string they select.
pub const COUNTRY_FILTERS: &[FilterOption] = &[
    FilterOption { key: "usa", label: "United States" },
    FilterOption { key: "uk", label: "United Kingdom" },
    FilterOption { key: "canada", label: "Canada" },
    FilterOption { key: "australia", label: "Australia" },
    FilterOption { key: "germany", label: "Germany" },
];

/// Program keywords offered by the local view. The key is matched as a
/// substring of program names; the label is for display only.
pub const PROGRAM_FILTERS: &[FilterOption] = &[
    FilterOption { key: "engineering", label: "Engineering" },
    FilterOption { key: "business", label: "Business" },
    FilterOption { key: "medical", label: "Medical" },
    FilterOption { key: "arts", label: "Arts & Design" },
];

/// Country display name for a country filter key, if the key is known.
#[must_use]
pub fn country_for_key(key: &str) -> Option<&'static str> {
    COUNTRY_FILTERS
        .iter()
        .find(|option| option.key == key)
        .map(|option| option.label)
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// Which screen's filter semantics apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Keys are program keywords.
    Local,
    /// Keys are country codes; unknown keys match nothing.
    International,
    /// Country codes when known, program keywords otherwise.
    All,
}

impl View {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::International => "international",
            Self::All => "all",
        }
    }

    /// The catalog partition this view lists, if it is restricted to one.
    #[must_use]
    pub const fn category(self) -> Option<Category> {
        match self {
            Self::Local => Some(Category::Local),
            Self::International => Some(Category::International),
            Self::All => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            other => other
                .parse::<Category>()
                .map(Self::from)
                .map_err(|_| CoreError::UnknownVariant {
                    kind: "view",
                    value: s.to_string(),
                }),
        }
    }
}

impl From<Category> for View {
    fn from(category: Category) -> Self {
        match category {
            Category::Local => Self::Local,
            Category::International => Self::International,
        }
    }
}

/// Filter options for `view`, sentinel first.
#[must_use]
pub fn filter_options(view: View) -> Vec<FilterOption> {
    let sentinel = FilterOption {
        key: ALL_KEY,
        label: match view {
            View::Local => "All Programs",
            View::International => "All Countries",
            View::All => "All",
        },
    };
    let mut options = vec![sentinel];
    match view {
        View::Local => options.extend_from_slice(PROGRAM_FILTERS),
        View::International => options.extend_from_slice(COUNTRY_FILTERS),
        View::All => {
            options.extend_from_slice(COUNTRY_FILTERS);
            options.extend_from_slice(PROGRAM_FILTERS);
        }
    }
    options
}

// ---------------------------------------------------------------------------
// FilterKey
// ---------------------------------------------------------------------------

/// The single selected structured filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterKey {
    /// No structured constraint.
    #[default]
    All,
    /// A country code or program keyword.
    Key(String),
}

impl From<&str> for FilterKey {
    fn from(key: &str) -> Self {
        if key == ALL_KEY {
            Self::All
        } else {
            Self::Key(key.to_string())
        }
    }
}

impl From<String> for FilterKey {
    fn from(key: String) -> Self {
        if key == ALL_KEY { Self::All } else { Self::Key(key) }
    }
}

impl From<FilterKey> for String {
    fn from(key: FilterKey) -> Self {
        match key {
            FilterKey::All => ALL_KEY.to_string(),
            FilterKey::Key(key) => key,
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_KEY),
            Self::Key(key) => f.write_str(key),
        }
    }
}
