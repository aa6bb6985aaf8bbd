//! Core types for attrsort

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five mutually-exclusive classification buckets
///
/// Variant order is the canonical display order; every result mapping is
/// emitted in this order regardless of how the selection was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Length measurements with a unit suffix ("10 cm", "2 inches")
    Sizes,

    /// Apparel letter sizes (XS through XXXL)
    Shirts,

    /// Plain unsigned numbers, integer or decimal
    Number,

    /// Alphabetic words of length other than one
    Words,

    /// Single alphabetic characters
    Alphabet,
}

impl Category {
    /// All categories in canonical display order
    pub const ALL: [Category; 5] = [
        Category::Sizes,
        Category::Shirts,
        Category::Number,
        Category::Words,
        Category::Alphabet,
    ];

    /// Selection key for this category, as accepted from callers
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sizes => "sizes",
            Self::Shirts => "shirts",
            Self::Number => "number",
            Self::Words => "words",
            Self::Alphabet => "alphabet",
        }
    }

    /// Display label used to key the result mapping
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sizes => "Sizes",
            Self::Shirts => "Shirts",
            Self::Number => "Numbers",
            Self::Words => "Words",
            Self::Alphabet => "Alphabet",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sizes" => Ok(Self::Sizes),
            "shirts" => Ok(Self::Shirts),
            "number" => Ok(Self::Number),
            "words" => Ok(Self::Words),
            "alphabet" => Ok(Self::Alphabet),
            other => Err(Error::category(other)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction applied to every selected category's sorted output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest key first
    #[default]
    Ascending,

    /// Largest key first (stable ascending sort, then reversed)
    Descending,
}

impl SortDirection {
    /// Whether output sequences should be reversed after the ascending sort
    pub fn is_descending(&self) -> bool {
        matches!(self, Self::Descending)
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(Error::direction(other)),
        }
    }
}

/// Advisory outcomes of a sort invocation
///
/// These are normal results, not errors: the engine keeps returning a valid
/// (possibly empty-valued) report alongside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    /// The raw input was empty or all-whitespace
    NothingToSort,

    /// Input was non-empty but no token classified into a selected category
    NoMatchingAttributes,
}

impl Advisory {
    /// Human-readable message for presentation shells
    pub fn message(&self) -> &'static str {
        match self {
            Self::NothingToSort => "nothing to sort: enter or upload values to sort",
            Self::NoMatchingAttributes => "no matching attributes found for the selected types",
        }
    }
}

/// Sorted tokens for a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// The category these tokens classified into
    pub category: Category,

    /// Original token strings in final sorted order
    pub tokens: Vec<String>,
}

impl CategoryGroup {
    /// Create a new group
    pub fn new(category: Category, tokens: Vec<String>) -> Self {
        Self { category, tokens }
    }
}

/// Result of one sort invocation
///
/// Groups appear in canonical category order restricted to the caller's
/// selection; a selected category with no members is present with an empty
/// token list, never omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortReport {
    /// Per-category sorted output, canonical order
    pub groups: Vec<CategoryGroup>,

    /// Advisory outcome, if any
    pub advisory: Option<Advisory>,
}

impl SortReport {
    /// Look up the sorted tokens for a category, if it was selected
    pub fn tokens(&self, category: Category) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.tokens.as_slice())
    }

    /// Whether every group in the report is empty
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.tokens.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Shirts".parse::<Category>().unwrap(), Category::Shirts);
        assert_eq!(" number ".parse::<Category>().unwrap(), Category::Number);
        assert!("sneakers".parse::<Category>().is_err());
    }

    #[test]
    fn direction_accepts_short_and_long_forms() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Ascending);
        assert_eq!(
            "Descending".parse::<SortDirection>().unwrap(),
            SortDirection::Descending
        );
        assert!("sideways".parse::<SortDirection>().is_err());
    }

    #[test]
    fn report_lookup_by_category() {
        let report = SortReport {
            groups: vec![CategoryGroup::new(
                Category::Words,
                vec!["blue".into(), "red".into()],
            )],
            advisory: None,
        };
        assert_eq!(report.tokens(Category::Words).unwrap(), ["blue", "red"]);
        assert!(report.tokens(Category::Sizes).is_none());
        assert!(!report.is_empty());
    }
}
