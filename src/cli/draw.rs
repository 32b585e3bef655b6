//! Draw command implementation.
//!
//! Runs the interactive drawing session on stdin/stdout, then exports the
//! painted canvas as `<name>.ppm`.

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Args;

use crate::canvas::write_ppm;
use crate::error::{DoodleError, Result};
use crate::output::{display_path, Printer};
use crate::session;

/// Draw shapes interactively and export the result
#[derive(Args, Debug)]
pub struct DrawArgs {
    /// Directory to export the image into
    #[arg(long, short, default_value = ".")]
    pub output: PathBuf,
}

pub fn run(args: DrawArgs, printer: &Printer) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let outcome = session::run(&mut input, &mut stdout)?;

    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| DoodleError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let path = args.output.join(format!("{}.ppm", outcome.stem));
    write_ppm(&outcome.canvas, &path)?;

    let (width, height) = outcome.canvas.dimensions();
    printer.success(
        "Exported",
        &format!("{}x{} image to {}", width, height, display_path(&path)),
    );

    Ok(())
}
