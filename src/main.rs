use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod crops;
mod generate;
mod stages;
mod types;
mod utils;

#[derive(Parser)]
#[command(name = "crop-stages")]
#[command(about = "BBCH growth stage reference pages for crops")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one HTML page per crop (the default when no command is given)
    Generate {
        /// Output directory for the crop pages
        #[arg(short, long, default_value = generate::OUTPUT_DIR)]
        output: PathBuf,
        /// Remove pages of crops that are no longer registered
        #[arg(long)]
        prune: bool,
    },
    /// Print the stage table a crop's page is built from
    Show {
        /// Crop slug (e.g. "tomato")
        #[arg(value_name = "SLUG")]
        slug: String,
    },
    /// List registered crops and their crop types
    List {
        /// Print the registry as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        None => generate::run_generate(
            &PathBuf::from(generate::OUTPUT_DIR),
            &generate::GenerateOptions::default(),
        ),
        Some(Commands::Generate { output, prune }) => {
            generate::run_generate(&output, &generate::GenerateOptions { prune })
        }
        Some(Commands::Show { slug }) => stages::run_show(&slug),
        Some(Commands::List { json }) => crops::run_list(json),
    }
}
