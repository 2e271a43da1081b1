//! Flatbank ops - the state-free banking verbs.
//!
//! Every verb follows one shape: read one or two accounts, validate the
//! business rule, mutate the in-memory copy, present it through the
//! [`Confirmation`] seam, and only then write back through the store.
//! No verb retries a failed read or write; a failure surfaces once and
//! the operation ends.

pub mod cash;
pub mod confirm;
pub mod create;
pub mod error;
pub mod transfer;

pub use cash::{deposit, pay_debt, take_loan, withdraw};
pub use confirm::{AutoConfirm, Confirmation};
pub use create::{create, NewAccount};
pub use error::OpsError;
pub use transfer::{commit, stage, transfer, TransferStage};
