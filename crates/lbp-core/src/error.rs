//! Crate-level error aggregating every stage.

use thiserror::Error;

use crate::buffer::BufferError;
use crate::codec::{DecodeError, EncodeError};
use crate::lbp::LbpError;

/// Any failure of the decode → grayscale → LBP → encode pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Buffer(#[from] BufferError),

    #[error(transparent)]
    Lbp(#[from] LbpError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
