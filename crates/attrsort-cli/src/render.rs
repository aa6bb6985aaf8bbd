//! Plain-text rendering of a sort report

use attrsort_core::SortReport;

/// Render each category as a labeled line, canonical order
pub fn render_columns(report: &SortReport) -> String {
    report
        .groups
        .iter()
        .map(|g| format!("{}: {}", g.category.label(), g.tokens.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}
