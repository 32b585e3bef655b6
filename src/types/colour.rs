//! Colour type and the fixed palette.

use std::fmt;
use std::str::FromStr;

use crate::error::{DoodleError, Result};

/// An RGB colour value with components in [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new colour from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

/// A named colour from the fixed palette.
///
/// The palette is closed: exactly these nine entries exist, and every canvas
/// cell holds one of them. Anything a caller hands in as a colour *name* goes
/// through [`Colour::from_name`] first, so an out-of-palette colour can never
/// reach a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Brown,
    Black,
    White,
}

impl Colour {
    /// Every palette entry, in palette order.
    pub const ALL: [Colour; 9] = [
        Colour::Red,
        Colour::Green,
        Colour::Blue,
        Colour::Yellow,
        Colour::Orange,
        Colour::Purple,
        Colour::Brown,
        Colour::Black,
        Colour::White,
    ];

    /// Look up a colour by its palette name.
    ///
    /// Matching is exact: palette names are lowercase, and an unrecognized
    /// name is an error, never a default.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "red" => Ok(Colour::Red),
            "green" => Ok(Colour::Green),
            "blue" => Ok(Colour::Blue),
            "yellow" => Ok(Colour::Yellow),
            "orange" => Ok(Colour::Orange),
            "purple" => Ok(Colour::Purple),
            "brown" => Ok(Colour::Brown),
            "black" => Ok(Colour::Black),
            "white" => Ok(Colour::White),
            _ => Err(DoodleError::UnknownColour {
                name: name.to_string(),
            }),
        }
    }

    /// The palette name of this colour.
    pub const fn name(self) -> &'static str {
        match self {
            Colour::Red => "red",
            Colour::Green => "green",
            Colour::Blue => "blue",
            Colour::Yellow => "yellow",
            Colour::Orange => "orange",
            Colour::Purple => "purple",
            Colour::Brown => "brown",
            Colour::Black => "black",
            Colour::White => "white",
        }
    }

    /// The RGB value of this colour.
    pub const fn rgb(self) -> Rgb {
        match self {
            Colour::Red => Rgb::new(255, 0, 0),
            Colour::Green => Rgb::new(0, 255, 0),
            Colour::Blue => Rgb::new(0, 0, 255),
            Colour::Yellow => Rgb::new(255, 255, 0),
            Colour::Orange => Rgb::new(255, 164, 0),
            Colour::Purple => Rgb::new(128, 0, 128),
            Colour::Brown => Rgb::new(165, 42, 42),
            Colour::Black => Rgb::new(0, 0, 0),
            Colour::White => Rgb::new(255, 255, 255),
        }
    }
}

impl FromStr for Colour {
    type Err = DoodleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
