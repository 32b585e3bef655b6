//! Axis-aligned rectangle fills.

use std::fmt;

use crate::canvas::Canvas;
use crate::error::Result;
use crate::types::{Colour, Point};

use super::ensure_in_bounds;

/// An axis-aligned rectangle spanning a lower-left and an upper-right corner.
///
/// The fill is half-open: x ∈ [ll.x, ur.x), y ∈ [ll.y, ur.y). A rectangle
/// whose corners coincide covers nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle {
    /// Lower-left corner.
    pub ll: Point,
    /// Upper-right corner (exclusive in both axes).
    pub ur: Point,
    /// Fill colour name, resolved against the palette at draw time.
    pub colour: String,
}

impl Rectangle {
    pub fn new(ll: Point, ur: Point, colour: impl Into<String>) -> Self {
        Self {
            ll,
            ur,
            colour: colour.into(),
        }
    }

    /// Validate this rectangle against a canvas without painting.
    ///
    /// Both corners must lie on the canvas, then the colour name must be in
    /// the palette. On success returns the resolved fill colour.
    pub fn validate(&self, canvas: &Canvas) -> Result<Colour> {
        ensure_in_bounds(&[self.ll, self.ur], canvas)?;
        Colour::from_name(&self.colour)
    }

    /// Validate and paint this rectangle onto the canvas.
    pub fn draw(&self, canvas: &mut Canvas) -> Result<()> {
        let colour = self.validate(canvas)?;

        for x in self.ll.x..self.ur.x {
            for y in self.ll.y..self.ur.y {
                canvas.set_pixel(x, y, colour)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle: {} to {}", self.ll, self.ur)
    }
}
