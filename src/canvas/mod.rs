//! The pixel canvas: a fixed-size colour grid with bounds-checked access.

mod ppm;

pub use ppm::{encode_ppm, write_ppm};

use crate::error::{DoodleError, Result};
use crate::types::{Colour, Point};

/// A fixed-size grid of palette colours.
///
/// The canvas owns all pixel state. It is created once with its dimensions,
/// painted in place by draw and clear calls, and read out by export. Every
/// cell holds a valid palette colour at all times; cells start white.
///
/// Zero-sized canvases are not rejected; every coordinate is simply out of
/// bounds on one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    /// Row-major pixel storage: (x, y) lives at `y * width + x`.
    pixels: Vec<Colour>,
}

impl Canvas {
    /// Create a canvas with every cell set to white.
    pub fn new(width: u32, height: u32) -> Self {
        let cells = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![Colour::White; cells],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether a point lies within [0, width) x [0, height).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }

    /// Paint a single pixel.
    ///
    /// The write is unconditional: the last write to a cell wins, there is
    /// no blending.
    pub fn set_pixel(&mut self, x: i32, y: i32, colour: Colour) -> Result<()> {
        let index = self.index_of(x, y)?;
        self.pixels[index] = colour;
        Ok(())
    }

    /// Read a single pixel.
    pub fn get_pixel(&self, x: i32, y: i32) -> Result<Colour> {
        let index = self.index_of(x, y)?;
        Ok(self.pixels[index])
    }

    /// Reset every cell to white. Cannot fail.
    pub fn clear(&mut self) {
        self.pixels.fill(Colour::White);
    }

    /// Iterate rows in y order; each row holds `width` cells in x order.
    pub fn rows(&self) -> impl Iterator<Item = &[Colour]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }

    fn index_of(&self, x: i32, y: i32) -> Result<usize> {
        if !self.contains(Point::new(x, y)) {
            return Err(DoodleError::OutOfBounds {
                x: i64::from(x),
                y: i64::from(y),
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_white() {
        let canvas = Canvas::new(3, 2);
        assert_eq!(canvas.dimensions(), (3, 2));
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(canvas.get_pixel(x, y).unwrap(), Colour::White);
            }
        }
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut canvas = Canvas::new(4, 4);
        canvas.set_pixel(1, 2, Colour::Red).unwrap();

        assert_eq!(canvas.get_pixel(1, 2).unwrap(), Colour::Red);
        assert_eq!(canvas.get_pixel(2, 1).unwrap(), Colour::White);
    }

    #[test]
    fn test_last_write_wins() {
        let mut canvas = Canvas::new(2, 2);
        canvas.set_pixel(0, 0, Colour::Red).unwrap();
        canvas.set_pixel(0, 0, Colour::Blue).unwrap();

        assert_eq!(canvas.get_pixel(0, 0).unwrap(), Colour::Blue);
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut canvas = Canvas::new(4, 3);

        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 3), (4, 3)] {
            let err = canvas.set_pixel(x, y, Colour::Red).unwrap_err();
            assert!(matches!(err, DoodleError::OutOfBounds { .. }));
        }
    }

    #[test]
    fn test_get_pixel_out_of_bounds() {
        let canvas = Canvas::new(4, 3);
        assert!(canvas.get_pixel(4, 0).is_err());
        assert!(canvas.get_pixel(0, 3).is_err());
        assert!(canvas.get_pixel(-2, 1).is_err());
    }

    #[test]
    fn test_contains_edges() {
        let canvas = Canvas::new(10, 5);

        assert!(canvas.contains(Point::new(0, 0)));
        assert!(canvas.contains(Point::new(9, 4)));
        assert!(!canvas.contains(Point::new(10, 0)));
        assert!(!canvas.contains(Point::new(0, 5)));
        assert!(!canvas.contains(Point::new(-1, 2)));
    }

    #[test]
    fn test_clear_resets_to_white() {
        let mut canvas = Canvas::new(3, 3);
        canvas.set_pixel(0, 0, Colour::Green).unwrap();
        canvas.set_pixel(2, 2, Colour::Black).unwrap();

        canvas.clear();

        assert_eq!(canvas, Canvas::new(3, 3));
    }

    #[test]
    fn test_rows_are_row_major() {
        let mut canvas = Canvas::new(3, 2);
        canvas.set_pixel(2, 0, Colour::Red).unwrap();
        canvas.set_pixel(0, 1, Colour::Blue).unwrap();

        let rows: Vec<&[Colour]> = canvas.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[Colour::White, Colour::White, Colour::Red]);
        assert_eq!(rows[1], &[Colour::Blue, Colour::White, Colour::White]);
    }

    #[test]
    fn test_zero_sized_canvas() {
        let mut canvas = Canvas::new(0, 0);

        assert!(!canvas.contains(Point::new(0, 0)));
        assert!(canvas.set_pixel(0, 0, Colour::Red).is_err());
        assert_eq!(canvas.rows().count(), 0);
    }
}
