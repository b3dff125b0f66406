pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nav")]
#[command(about = "Navigation CLI - inspect page descriptors, menu trees and JSON payloads")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Search a JSON/YAML document for the first value under a key")]
    Probe {
        #[arg(help = "Document to search")]
        file: PathBuf,
        #[arg(help = "Field name to look for")]
        key: String,
    },

    #[command(about = "Flatten a navigation tree file into its route paths")]
    NavPaths {
        #[arg(help = "Navigation tree document")]
        file: PathBuf,
    },

    #[command(about = "Page descriptor operations")]
    Pages {
        #[command(subcommand)]
        cmd: commands::pages::PagesCommands,
    },
}

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Probe { file, key } => commands::probe::handle(&file, &key, output_format),
        Commands::NavPaths { file } => commands::nav::handle(&file, output_format),
        Commands::Pages { cmd } => commands::pages::handle(cmd, output_format),
    }
}
