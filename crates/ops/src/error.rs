//! Operation outcomes

use flatbank_core::ValidationError;
use flatbank_store::StoreError;
use thiserror::Error;

/// Everything an operation can report besides success.
///
/// `Aborted` is a declined confirmation, not a fault. Account-number
/// collisions during generation are retried inside the key generator and
/// never appear here.
#[derive(Error, Debug)]
pub enum OpsError {
    #[error("no account with id {0}")]
    NotFound(u32),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("account store failure: {0}")]
    Store(#[from] StoreError),

    #[error("operation aborted by user")]
    Aborted,

    /// The transfer's second rewrite failed after the first succeeded:
    /// account {debited} was debited but account {credited} never received
    /// the funds. The store offers no compensating write.
    #[error(
        "transfer partially applied: account {debited} was debited but \
         crediting account {credited} failed: {source}"
    )]
    PartialTransfer {
        debited: u32,
        credited: u32,
        #[source]
        source: StoreError,
    },
}
