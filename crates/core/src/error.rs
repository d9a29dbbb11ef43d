use std::io;

use thiserror::Error;

use crate::types::{Cell, Heading};

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("maze side must be between 1 and {max}, got {side}")]
    InvalidSize { side: usize, max: usize },
    #[error("wall at {cell} facing {heading:?} lies outside a {side}x{side} maze")]
    WallOutOfBounds { cell: Cell, heading: Heading, side: usize },
    #[error("invalid maze file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("maze file I/O failed: {0}")]
    Io(#[from] io::Error),
}
