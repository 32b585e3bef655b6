pub mod build;
pub mod check;
pub mod completions;
pub mod draw;
pub mod palette;

use clap::{Parser, Subcommand};

/// doodle - Draw filled shapes onto a canvas and export it as a PPM image
#[derive(Parser, Debug)]
#[command(name = "doodle")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw shapes interactively and export the result
    Draw(draw::DrawArgs),

    /// Render scene files to PPM images
    Build(build::BuildArgs),

    /// Validate scene files without rendering
    Check(check::CheckArgs),

    /// List the palette colours
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
