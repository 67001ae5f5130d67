use thiserror::Error;

use crate::Rectangle;

/// Errors raised by index operations.
///
/// These are programming errors on the caller's side (or a broken tree);
/// the index never tries to repair itself after one is raised.
#[derive(Debug, Error)]
pub enum RTreeError {
    #[error("invalid geometry: {rect} (low corner must not exceed high corner)")]
    InvalidGeometry { rect: Rectangle },

    #[error("buffer must be a non-negative number, got {buffer}")]
    InvalidBuffer { buffer: f64 },

    #[error("max_per_level must be at least 2, got {max_per_level}")]
    InvalidFanout { max_per_level: usize },

    #[error("cannot split a node with {children} children")]
    SplitUnderflow { children: usize },

    #[error("corrupt tree: {0}")]
    CorruptTree(String),

    #[error("WKT parse error: {0}")]
    Wkt(String),
}

pub type Result<T> = std::result::Result<T, RTreeError>;
