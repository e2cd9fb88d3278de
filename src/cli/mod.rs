pub mod completions;
pub mod generate;
pub mod import;
pub mod sizes;

use clap::{Parser, Subcommand};

/// appicon - iOS app icon set generator
#[derive(Parser, Debug)]
#[command(name = "appicon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Synthesize the brand mark and generate the full icon set
    Generate(generate::GenerateArgs),

    /// Generate the icon set from an existing source image
    Import(import::ImportArgs),

    /// Print the size catalogue
    Sizes(sizes::SizesArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
