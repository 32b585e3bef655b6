//! doodle - Draw filled shapes onto a canvas and export it as a PPM image
//!
//! A library for rasterizing simple filled shapes (rectangles, triangles,
//! circles) in named colours onto a fixed-size pixel canvas, plus the
//! interactive session and scene-file front ends the `doodle` binary wires
//! together.

pub mod canvas;
pub mod cli;
pub mod error;
pub mod output;
pub mod scene;
pub mod session;
pub mod shapes;
pub mod types;

pub use canvas::{encode_ppm, write_ppm, Canvas};
pub use error::{DoodleError, Result};
pub use scene::{Scene, SceneIssue};
pub use session::SessionOutcome;
pub use shapes::{Circle, Rectangle, Shape, ShapeKind, Triangle};
pub use types::{Colour, Point, Rgb};
