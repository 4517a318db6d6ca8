//! Crate error type
//!
//! Physics code never propagates these into the frame loop: it logs and
//! substitutes a fallback. Layout and settings loading return them.

use std::fmt;

/// Errors produced by the brick game core
#[derive(Debug)]
pub enum Error {
    /// A zero-length vector was normalized or had its magnitude set
    DegenerateVector,
    /// A shape was constructed with a non-positive extent
    InvalidShape(String),
    /// A level layout failed validation
    InvalidLayout { name: String, reason: String },
    /// Malformed JSON in a settings or layout document
    Config(serde_json::Error),
    /// Failed to read a settings or layout file
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegenerateVector => write!(f, "zero-length vector has no direction"),
            Error::InvalidShape(msg) => write!(f, "invalid shape: {msg}"),
            Error::InvalidLayout { name, reason } => {
                write!(f, "invalid layout '{name}': {reason}")
            }
            Error::Config(e) => write!(f, "config error: {e}"),
            Error::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
