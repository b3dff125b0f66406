use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::pages::filter::filter_eq;
use crate::pages::order::sort_by_order;
use crate::pages::record::PageRecord;
use crate::pages::registry::PageRegistry;
use crate::pages::types::SortDirection;

#[derive(Subcommand)]
pub enum PagesCommands {
    #[command(about = "List pages from a descriptor file, filtered and ordered")]
    List {
        #[arg(help = "Pages descriptor file (JSON or YAML)")]
        file: PathBuf,

        #[arg(long = "where", value_name = "FIELD=VALUE", help = "Exact-match condition, repeatable")]
        conditions: Vec<String>,

        #[arg(long, value_name = "asc|desc", help = "Sort direction for the 'order' field")]
        order: Option<String>,

        #[arg(long, help = "Maximum number of pages to print")]
        limit: Option<usize>,
    },
}

pub fn handle(cmd: PagesCommands, output: OutputFormat) -> Result<()> {
    match cmd {
        PagesCommands::List { file, conditions, order, limit } => {
            list(&file, &conditions, order.as_deref(), limit, output)
        }
    }
}

fn list(
    file: &Path,
    conditions: &[String],
    order: Option<&str>,
    limit: Option<usize>,
    output: OutputFormat,
) -> Result<()> {
    let registry = PageRegistry::load(file)
        .with_context(|| format!("failed to load pages from {}", file.display()))?;

    let mut pages = registry.pages().to_vec();
    for condition in conditions {
        let (field, raw) = condition
            .split_once('=')
            .with_context(|| format!("invalid --where '{}', expected FIELD=VALUE", condition))?;
        let value = parse_scalar(raw);
        pages = filter_eq(&pages, field, &value);
    }

    let direction = order.map(SortDirection::parse).unwrap_or(SortDirection::Asc);
    let mut pages = sort_by_order(pages, direction);
    if let Some(limit) = limit {
        pages.truncate(limit);
    }

    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&PageRecord::to_json_array(&pages))?)
        }
        OutputFormat::Text => {
            for page in &pages {
                // load() guarantees every page has a path
                println!("{}", page.path().unwrap_or("(no path)"));
            }
        }
    }

    Ok(())
}

/// Interpret a --where value: valid JSON scalars (numbers, booleans, null,
/// quoted strings) parse as themselves, anything else is a bare string.
fn parse_scalar(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_parse_as_json_first() {
        assert_eq!(parse_scalar("3"), json!(3));
        assert_eq!(parse_scalar("true"), json!(true));
        assert_eq!(parse_scalar("null"), Value::Null);
        assert_eq!(parse_scalar("\"3\""), json!("3"));
        assert_eq!(parse_scalar("docs"), json!("docs"));
    }
}
