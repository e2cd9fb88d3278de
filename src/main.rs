use appicon::cli::{Cli, Commands};
use appicon::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => appicon::cli::generate::run(args, &printer)?,
        Commands::Import(args) => appicon::cli::import::run(args, &printer)?,
        Commands::Sizes(args) => appicon::cli::sizes::run(args)?,
        Commands::Completions(args) => appicon::cli::completions::run(args)?,
    }

    Ok(())
}
