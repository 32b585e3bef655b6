use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::Colour;

/// List the palette colours
#[derive(Args, Debug)]
pub struct PaletteArgs {}

pub fn run(_args: PaletteArgs, printer: &Printer) -> Result<()> {
    printer.status("Listing", &plural(Colour::ALL.len(), "colour", "colours"));

    // Palette lines go to stdout
    for colour in Colour::ALL {
        println!("{:<8} {}", colour.name(), colour.rgb());
    }

    Ok(())
}
