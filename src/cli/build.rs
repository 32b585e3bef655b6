//! Build command implementation.
//!
//! Renders scene files and writes PPM images.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::canvas::write_ppm;
use crate::error::{DoodleError, Result};
use crate::output::{display_path, plural, Printer};
use crate::scene::Scene;

/// Render scene files to PPM images
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Scene files to render
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output directory
    #[arg(long, short, default_value = "dist")]
    pub output: PathBuf,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| DoodleError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut total = 0;

    for file in &args.files {
        let ext = file.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "yaml" && ext != "yml" {
            printer.warning(
                "Skipping",
                &format!("{} (not a .yaml scene)", display_path(file)),
            );
            continue;
        }

        printer.status("Rendering", &display_path(file));

        let scene = Scene::load(file)?;
        let canvas = scene.render()?;

        let output_path = args.output.join(format!("{}.ppm", scene.output_stem(file)));
        write_ppm(&canvas, &output_path)?;

        let (width, height) = canvas.dimensions();
        printer.info(
            "Exported",
            &format!("{}x{} image to {}", width, height, display_path(&output_path)),
        );
        total += 1;
    }

    printer.success(
        "Finished",
        &format!(
            "{} to {}",
            plural(total, "image", "images"),
            display_path(&args.output)
        ),
    );

    Ok(())
}
