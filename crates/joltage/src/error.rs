use std::num::ParseIntError;

use graph_rs::GraphError;
use thiserror::Error;

use crate::adapters::{MAX_RATING, Rating};

#[derive(Error, Debug)]
pub enum JoltageError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid adapter rating '{value}': {source}")]
    InvalidRating {
        line: usize,
        value: String,
        source: ParseIntError,
    },

    #[error("line {line}: adapter rating {value} exceeds {max}", max = MAX_RATING)]
    RatingOutOfRange { line: usize, value: Rating },

    #[error("no device rating above the highest adapter {highest}")]
    DeviceOutOfRange { highest: Rating },

    #[error("Adapter graph error: {0}")]
    Graph(#[from] GraphError<Rating>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
