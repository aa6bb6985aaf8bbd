use anyhow::Context;
use attrsort_cli::cli::Cli;
use attrsort_cli::render::render_columns;
use attrsort_core::Category;
use attrsort_engine::sort_attributes;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Built-in sample covering every category
const EXAMPLE_INPUT: &str = "red, blue, green, 5, 10 cm, 1 km, XL, M, 3.14, hello, a, t";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let raw = if cli.example {
        EXAMPLE_INPUT.to_string()
    } else if let Some(path) = &cli.file {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    } else if let Some(input) = cli.input.clone() {
        input
    } else {
        anyhow::bail!("no input given: pass values, --file, or --example");
    };

    let selected = parse_categories(&cli.categories)?;
    tracing::debug!(?selected, direction = ?cli.direction, "sorting attributes");
    let report = sort_attributes(&raw, &selected, cli.direction);

    if let Some(advisory) = report.advisory {
        eprintln!("warning: {}", advisory.message());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !report.groups.is_empty() {
        println!("{}", render_columns(&report));
    }

    Ok(())
}

/// Parse a comma-separated category selection
fn parse_categories(list: &str) -> anyhow::Result<Vec<Category>> {
    list.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Category>()
                .with_context(|| format!("invalid category {s:?}"))
        })
        .collect()
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "attrsort=debug,attrsort_engine=debug"
    } else {
        "attrsort=info,attrsort_engine=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
