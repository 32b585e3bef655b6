use miette::Diagnostic;
use thiserror::Error;

/// Main error type for doodle operations
#[derive(Error, Diagnostic, Debug)]
pub enum DoodleError {
    #[error("point ({x},{y}) is out of bounds on a {width}x{height} canvas")]
    #[diagnostic(code(doodle::bounds))]
    OutOfBounds {
        // Derived extents (circle corners) can exceed the i32 pixel range.
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    #[error("unknown colour: {name}")]
    #[diagnostic(
        code(doodle::colour),
        help("valid colours are red, green, blue, yellow, orange, purple, brown, black and white")
    )]
    UnknownColour { name: String },

    #[error("invalid geometry: {message}")]
    #[diagnostic(code(doodle::geometry))]
    InvalidGeometry { message: String },

    #[error("IO error: {0}")]
    #[diagnostic(code(doodle::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(doodle::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Scene error: {message}")]
    #[diagnostic(code(doodle::scene))]
    Scene {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(doodle::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, DoodleError>;
