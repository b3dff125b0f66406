use std::path::Path;

use anyhow::Result;

use crate::cli::OutputFormat;
use crate::traverse::collect_paths;

pub fn handle(file: &Path, output: OutputFormat) -> Result<()> {
    let tree = super::load_document(file)?;
    let paths = collect_paths(&tree);

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&paths)?),
        OutputFormat::Text => {
            for path in &paths {
                println!("{}", path);
            }
        }
    }

    Ok(())
}
