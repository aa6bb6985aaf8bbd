//! Multi-category sort orchestration
//!
//! One synchronous pass per invocation: tokenize, classify, bucket by
//! category, stable-sort each selected bucket with its category comparator,
//! then emit groups in canonical category order. Descending output reverses
//! the fully-sorted ascending sequence rather than negating the comparator,
//! so equal-key tokens keep their input order in either direction.

use crate::{apparel, classifier, units};
use attrsort_core::{Advisory, Category, CategoryGroup, SortDirection, SortReport};
use std::collections::HashMap;
use tracing::debug;

/// Split raw input on commas into trimmed, non-empty tokens in encounter order
pub fn tokenize(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Classify and sort the attributes in `raw`
///
/// Tokens that classify into no category or into an unselected one are
/// silently dropped. Every selected category appears in the report, with an
/// empty token list when nothing classified into it. Never fails: an empty
/// input or an input with no recognizable attributes yields an advisory on
/// the report, not an error.
pub fn sort_attributes(
    raw: &str,
    selected: &[Category],
    direction: SortDirection,
) -> SortReport {
    let tokens = tokenize(raw);
    if tokens.is_empty() {
        return SortReport {
            groups: Vec::new(),
            advisory: Some(Advisory::NothingToSort),
        };
    }

    let mut buckets: HashMap<Category, Vec<&str>> = HashMap::new();
    for &token in &tokens {
        if let Some(category) = classifier::classify(token) {
            if selected.contains(&category) {
                buckets.entry(category).or_default().push(token);
            }
        }
    }
    debug!(
        tokens = tokens.len(),
        classified = buckets.values().map(Vec::len).sum::<usize>(),
        "bucketed attribute tokens"
    );

    let groups: Vec<CategoryGroup> = Category::ALL
        .iter()
        .filter(|c| selected.contains(c))
        .copied()
        .map(|category| {
            let bucket = buckets.remove(&category).unwrap_or_default();
            CategoryGroup::new(category, sort_bucket(category, bucket, direction))
        })
        .collect();

    let advisory = if groups.iter().all(|g| g.tokens.is_empty()) {
        Some(Advisory::NoMatchingAttributes)
    } else {
        None
    };

    SortReport { groups, advisory }
}

/// Stable-sort one category's tokens ascending by its sort key, then reverse
/// for descending output
fn sort_bucket(
    category: Category,
    mut bucket: Vec<&str>,
    direction: SortDirection,
) -> Vec<String> {
    match category {
        Category::Sizes => sort_by_numeric_key(&mut bucket, |t| {
            units::leading_measurement(&t.to_lowercase()).unwrap_or(f64::INFINITY)
        }),
        Category::Shirts => {
            bucket.sort_by_key(|t| apparel::rank(&t.to_lowercase()).unwrap_or(u8::MAX))
        }
        Category::Number => {
            sort_by_numeric_key(&mut bucket, |t| t.parse::<f64>().unwrap_or(f64::INFINITY))
        }
        Category::Words | Category::Alphabet => bucket.sort(),
    }

    if direction.is_descending() {
        bucket.reverse();
    }
    bucket.into_iter().map(str::to_owned).collect()
}

/// Stable sort by a precomputed f64 key; `total_cmp` gives the infinity
/// fallback a well-defined maximal position without panicking
fn sort_by_numeric_key<F>(bucket: &mut Vec<&str>, key: F)
where
    F: Fn(&str) -> f64,
{
    let mut keyed: Vec<(f64, &str)> = bucket.iter().map(|t| (key(t), *t)).collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    *bucket = keyed.into_iter().map(|(_, t)| t).collect();
}
