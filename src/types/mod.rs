//! Core domain types for doodle.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Colour` - the fixed nine-entry colour palette
//! - `Rgb` - raw RGB triples for export
//! - `Point` - integer canvas coordinates

mod colour;
mod point;

pub use colour::{Colour, Rgb};
pub use point::Point;
