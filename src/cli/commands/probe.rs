use std::path::Path;

use anyhow::Result;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::traverse::find_key;

pub fn handle(file: &Path, key: &str, output: OutputFormat) -> Result<()> {
    let document = super::load_document(file)?;

    match find_key(&document, key) {
        Some(value) => {
            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
                // Bare strings print without quotes in text mode
                OutputFormat::Text => match value {
                    Value::String(s) => println!("{}", s),
                    other => println!("{}", other),
                },
            }
            Ok(())
        }
        None => anyhow::bail!("key '{}' not found in {}", key, file.display()),
    }
}
