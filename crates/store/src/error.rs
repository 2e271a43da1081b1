//! Store errors

use crate::codec::CodecError;
use thiserror::Error;

/// Errors from the sequential store.
///
/// I/O failures abort the requested operation with no retry and no
/// recovery; the store never invents a value on partial failure.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on account store: {0}")]
    Io(#[from] std::io::Error),

    #[error("record truncated: expected {expected} bytes, read {got}")]
    TruncatedRecord { expected: usize, got: usize },

    #[error("no account with id {0}")]
    NotFound(u32),

    #[error("id space exhausted: an existing record already carries the maximum id")]
    IdsExhausted,

    #[error(transparent)]
    Codec(#[from] CodecError),
}
