use clap::Parser;
use miette::Result;

use doodle::cli::{Cli, Commands};
use doodle::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Draw(args) => doodle::cli::draw::run(args, &printer)?,
        Commands::Build(args) => doodle::cli::build::run(args, &printer)?,
        Commands::Check(args) => doodle::cli::check::run(args, &printer)?,
        Commands::Palette(args) => doodle::cli::palette::run(args, &printer)?,
        Commands::Completions(args) => doodle::cli::completions::run(args)?,
    }

    Ok(())
}
