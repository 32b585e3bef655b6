//! The interactive drawing session.
//!
//! A session prompts for canvas dimensions, loops over a shape menu until
//! the user stops, then asks for an output name. It is generic over its
//! input and output streams, so the whole dialogue can be driven by scripted
//! text in tests; the `draw` command runs it on stdin/stdout.
//!
//! Input is read as whitespace-separated tokens, so `1 1` and two lines of
//! `1` answer a point prompt equally well. Drawing failures are reported and
//! the menu comes back; only running out of input ends the session early.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::canvas::Canvas;
use crate::error::{DoodleError, Result};
use crate::shapes::{Circle, Rectangle, Shape, Triangle};
use crate::types::Point;

/// What an interactive session produced: the painted canvas and the
/// file stem the user asked for (no extension).
#[derive(Debug)]
pub struct SessionOutcome {
    pub canvas: Canvas,
    pub stem: String,
}

/// Run an interactive drawing session over the given streams.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<SessionOutcome> {
    let mut session = Session {
        input,
        output,
        pending: VecDeque::new(),
    };
    session.run()
}

struct Session<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn run(&mut self) -> Result<SessionOutcome> {
        self.report("doodle: draw filled shapes onto a canvas, then export it as a PPM image.")?;
        self.report("")?;

        let height = self.dimension("Enter the number of rows (height) for the canvas: ")?;
        let width = self.dimension("Enter the number of columns (width) for the canvas: ")?;
        self.report("")?;

        let mut canvas = Canvas::new(width, height);

        loop {
            self.report("Select a shape to draw:")?;
            self.report("   R for a rectangle")?;
            self.report("   T for a triangle")?;
            self.report("   C for a circle")?;
            self.report("or X to stop drawing shapes.")?;
            self.prompt("Your choice --> ")?;

            let choice = self.token()?;
            let shape = match choice.as_str() {
                "R" | "r" => self.rectangle()?,
                "T" | "t" => self.triangle()?,
                "C" | "c" => self.circle()?,
                "X" | "x" => break,
                _ => {
                    self.report("Invalid choice, please try again.")?;
                    continue;
                }
            };

            self.report(&shape.to_string())?;
            match shape.draw(&mut canvas) {
                Ok(()) => self.report(&format!("{} drawn successfully.", shape.kind()))?,
                Err(e) => self.report(&format!("**Error: {}", e))?,
            }
        }

        self.prompt("Enter the name of the output file (without extension): ")?;
        let stem = self.token()?;

        Ok(SessionOutcome { canvas, stem })
    }

    // -- shape dialogues --

    fn rectangle(&mut self) -> Result<Shape> {
        let ll =
            self.point("Enter the X and Y values of the lower left corner of the rectangle: ")?;
        let ur =
            self.point("Enter the X and Y values of the upper right corner of the rectangle: ")?;
        let colour = self.colour_name("rectangle")?;

        Ok(Rectangle::new(ll, ur, colour).into())
    }

    fn triangle(&mut self) -> Result<Shape> {
        let pt0 = self.point("Enter the X and Y values of the first point of the triangle: ")?;
        let pt1 = self.point("Enter the X and Y values of the second point of the triangle: ")?;
        let pt2 = self.point("Enter the X and Y values of the third point of the triangle: ")?;
        let colour = self.colour_name("triangle")?;

        Ok(Triangle::new(pt0, pt1, pt2, colour).into())
    }

    fn circle(&mut self) -> Result<Shape> {
        let center = self.point("Enter the X and Y values of the center of the circle: ")?;
        let radius = self.number("Enter the value of the radius of the circle: ")?;
        let colour = self.colour_name("circle")?;

        Ok(Circle::new(center, radius, colour).into())
    }

    // -- prompting helpers --

    fn colour_name(&mut self, shape: &str) -> Result<String> {
        self.prompt(&format!("Enter the colour of the {}: ", shape))?;
        self.token()
    }

    fn point(&mut self, text: &str) -> Result<Point> {
        loop {
            self.prompt(text)?;
            let x = self.token()?;
            let y = self.token()?;
            match (x.parse::<i32>(), y.parse::<i32>()) {
                (Ok(x), Ok(y)) => return Ok(Point::new(x, y)),
                _ => self.report("Please enter two whole numbers.")?,
            }
        }
    }

    fn number(&mut self, text: &str) -> Result<i32> {
        loop {
            self.prompt(text)?;
            match self.token()?.parse::<i32>() {
                Ok(n) => return Ok(n),
                Err(_) => self.report("Please enter a whole number.")?,
            }
        }
    }

    fn dimension(&mut self, text: &str) -> Result<u32> {
        loop {
            self.prompt(text)?;
            match self.token()?.parse::<u32>() {
                Ok(n) => return Ok(n),
                Err(_) => self.report("Please enter a whole number.")?,
            }
        }
    }

    /// Write a prompt without a trailing newline and flush, so it shows up
    /// before the session blocks on input.
    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn report(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Next whitespace-separated token, reading further lines as needed.
    fn token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(DoodleError::IoError(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ended before the session finished",
                )));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}
