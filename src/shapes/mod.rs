//! Shape types and their rasterisers.
//!
//! Every shape validates itself against the target canvas before painting a
//! single pixel: geometry first, then bounds for each defining point, then
//! the colour name. A shape is therefore either painted completely or not
//! at all.

mod circle;
mod rectangle;
mod triangle;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use triangle::Triangle;

use std::fmt;

use crate::canvas::Canvas;
use crate::error::{DoodleError, Result};
use crate::types::{Colour, Point};

/// The closed set of shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Triangle,
    Circle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Rectangle => f.write_str("Rectangle"),
            ShapeKind::Triangle => f.write_str("Triangle"),
            ShapeKind::Circle => f.write_str("Circle"),
        }
    }
}

/// Any drawable shape.
///
/// The shape set is fixed, so dispatch is a tagged variant rather than a
/// trait object. `kind` hands callers the discriminant directly instead of
/// making them parse it back out of the description string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Rectangle(Rectangle),
    Triangle(Triangle),
    Circle(Circle),
}

impl Shape {
    /// Which kind of shape this is.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    /// Validate this shape against a canvas without painting anything.
    ///
    /// On success returns the resolved fill colour.
    pub fn validate(&self, canvas: &Canvas) -> Result<Colour> {
        match self {
            Shape::Rectangle(rectangle) => rectangle.validate(canvas),
            Shape::Triangle(triangle) => triangle.validate(canvas),
            Shape::Circle(circle) => circle.validate(canvas),
        }
    }

    /// Validate and paint this shape onto the canvas.
    pub fn draw(&self, canvas: &mut Canvas) -> Result<()> {
        match self {
            Shape::Rectangle(rectangle) => rectangle.draw(canvas),
            Shape::Triangle(triangle) => triangle.draw(canvas),
            Shape::Circle(circle) => circle.draw(canvas),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Rectangle(rectangle) => rectangle.fmt(f),
            Shape::Triangle(triangle) => triangle.fmt(f),
            Shape::Circle(circle) => circle.fmt(f),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Shape::Rectangle(rectangle)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

/// Check every defining point against the canvas bounds, reporting the
/// first offending point.
pub(crate) fn ensure_in_bounds(points: &[Point], canvas: &Canvas) -> Result<()> {
    for &p in points {
        ensure_coord_in_bounds(i64::from(p.x), i64::from(p.y), canvas)?;
    }
    Ok(())
}

/// Bounds check for derived coordinates such as bounding-box corners,
/// which are computed in `i64` because they can fall outside the `i32`
/// range.
pub(crate) fn ensure_coord_in_bounds(x: i64, y: i64, canvas: &Canvas) -> Result<()> {
    let (width, height) = canvas.dimensions();
    if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
        return Err(DoodleError::OutOfBounds {
            x,
            y,
            width,
            height,
        });
    }
    Ok(())
}
