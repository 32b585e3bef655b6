//! Filled circles via a disk membership test.

use std::fmt;

use crate::canvas::Canvas;
use crate::error::{DoodleError, Result};
use crate::types::{Colour, Point};

use super::ensure_coord_in_bounds;

/// A filled circle around a center point.
///
/// A pixel belongs to the circle iff its Euclidean distance from the center
/// is at most the radius, so a radius of 0 covers exactly the center pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
    /// Fill colour name, resolved against the palette at draw time.
    pub colour: String,
}

impl Circle {
    pub fn new(center: Point, radius: i32, colour: impl Into<String>) -> Self {
        Self {
            center,
            radius,
            colour: colour.into(),
        }
    }

    /// Validate this circle against a canvas without painting.
    ///
    /// The radius must be non-negative, the bounding box center ± radius
    /// must lie on the canvas, then the colour name must be in the palette.
    /// On success returns the resolved fill colour.
    pub fn validate(&self, canvas: &Canvas) -> Result<Colour> {
        if self.radius < 0 {
            return Err(DoodleError::InvalidGeometry {
                message: format!("circle radius must be non-negative, got {}", self.radius),
            });
        }

        // Corners are computed in i64: center ± radius can exceed the i32
        // range, and an extreme circle is out of bounds, not an overflow.
        let r = i64::from(self.radius);
        let (cx, cy) = (i64::from(self.center.x), i64::from(self.center.y));
        ensure_coord_in_bounds(cx - r, cy - r, canvas)?;
        ensure_coord_in_bounds(cx + r, cy + r, canvas)?;
        Colour::from_name(&self.colour)
    }

    /// Validate and paint this circle onto the canvas.
    ///
    /// Every pixel of the bounding square is tested for disk membership;
    /// the bounding box was validated upfront, so no per-pixel bounds
    /// re-checks are needed.
    pub fn draw(&self, canvas: &mut Canvas) -> Result<()> {
        let colour = self.validate(canvas)?;
        let radius = f64::from(self.radius);

        for y in (self.center.y - self.radius)..=(self.center.y + self.radius) {
            for x in (self.center.x - self.radius)..=(self.center.x + self.radius) {
                if inside_circle(self.center, Point::new(x, y), radius) {
                    canvas.set_pixel(x, y, colour)?;
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Circle: centered around {} with radius {}",
            self.center, self.radius
        )
    }
}

/// Euclidean distance from `center` to `candidate` at most `r`.
fn inside_circle(center: Point, candidate: Point, r: f64) -> bool {
    let dx = f64::from(center.x - candidate.x);
    let dy = f64::from(center.y - candidate.y);
    (dx * dx + dy * dy).sqrt() <= r
}
