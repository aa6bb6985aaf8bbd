use attrsort_core::SortDirection;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "attrsort")]
#[command(
    author,
    version,
    about = "Classify comma-separated attribute values and sort each category"
)]
pub struct Cli {
    /// Comma-separated values to sort
    pub input: Option<String>,

    /// Read the values from a plain-text file instead
    #[arg(short, long, conflicts_with = "input")]
    pub file: Option<PathBuf>,

    /// Use the built-in example input
    #[arg(long, conflicts_with_all = ["input", "file"])]
    pub example: bool,

    /// Attribute types to sort (comma-separated: sizes,shirts,number,words,alphabet)
    #[arg(short, long, default_value = "sizes,shirts,number,words")]
    pub categories: String,

    /// Sort direction
    #[arg(short, long, default_value = "ascending", value_parser = parse_direction)]
    pub direction: SortDirection,

    /// Emit the result as JSON instead of labeled columns
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_direction(s: &str) -> Result<SortDirection, String> {
    s.parse().map_err(|e: attrsort_core::Error| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_flag_accepts_short_forms() {
        let cli = Cli::parse_from(["attrsort", "--direction", "desc", "a, b"]);
        assert_eq!(cli.direction, SortDirection::Descending);
        assert_eq!(cli.input.as_deref(), Some("a, b"));
    }

    #[test]
    fn default_selection_and_direction() {
        let cli = Cli::parse_from(["attrsort", "a"]);
        assert_eq!(cli.categories, "sizes,shirts,number,words");
        assert_eq!(cli.direction, SortDirection::Ascending);
    }
}
