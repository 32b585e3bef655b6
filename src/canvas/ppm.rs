//! Plain-text PPM (P3) export.
//!
//! The layout is fixed: a `P3` magic line, the dimensions, the maximum
//! channel value 255, then one line per canvas row holding the `r g b`
//! triples of that row separated by single spaces. Encoders that wrap long
//! lines produce valid PPM too, but this one keeps a row per line so the
//! output diffs cleanly.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{DoodleError, Result};

use super::Canvas;

/// Encode a canvas as P3 text into an arbitrary writer.
pub fn encode_ppm<W: Write>(canvas: &Canvas, out: &mut W) -> io::Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", canvas.width(), canvas.height())?;
    writeln!(out, "255")?;

    for row in canvas.rows() {
        for (x, colour) in row.iter().enumerate() {
            if x > 0 {
                write!(out, " ")?;
            }
            write!(out, "{}", colour.rgb())?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Write a canvas to a P3 file at `path`.
pub fn write_ppm(canvas: &Canvas, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| DoodleError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to create image file: {}", e),
    })?;

    let mut out = BufWriter::new(file);
    encode_ppm(canvas, &mut out).map_err(|e| DoodleError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write image data: {}", e),
    })?;

    out.flush().map_err(|e| DoodleError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to flush image data: {}", e),
    })?;

    Ok(())
}
