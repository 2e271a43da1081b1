//! The two-record transfer, expressed as an explicit stage/commit pair.
//!
//! Staging validates and produces both post-state records; committing
//! issues the two rewrites sequentially. Keeping the phases separate keeps
//! the store's consistency gap visible instead of burying it inside a
//! "do two writes" helper.

use crate::confirm::Confirmation;
use crate::error::OpsError;
use flatbank_core::money::MAX_BALANCE;
use flatbank_core::{validate, Account, ValidationError};
use flatbank_store::AccountStore;
use rust_decimal::Decimal;
use tracing::info;

/// A validated transfer, ready to commit. Holds the complete post-state
/// of both records; invariant: `source.balance + destination.balance`
/// equals the pre-stage total (conservation of funds).
#[derive(Debug, Clone)]
pub struct TransferStage {
    source: Account,
    destination: Account,
    amount: Decimal,
}

impl TransferStage {
    pub fn source(&self) -> &Account {
        &self.source
    }

    pub fn destination(&self) -> &Account {
        &self.destination
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Read both accounts, validate, and build the post-state records.
/// Nothing is written.
pub fn stage<S: AccountStore>(
    store: &S,
    source_id: u32,
    destination_id: u32,
    amount: Decimal,
) -> Result<TransferStage, OpsError> {
    if source_id == destination_id {
        return Err(ValidationError::SameAccount { id: source_id }.into());
    }
    validate::amount(amount)?;

    let mut source = store
        .find_by_id(source_id)?
        .ok_or(OpsError::NotFound(source_id))?;
    let mut destination = store
        .find_by_id(destination_id)?
        .ok_or(OpsError::NotFound(destination_id))?;

    if amount > source.balance {
        return Err(ValidationError::InsufficientFunds {
            requested: amount,
            available: source.balance,
        }
        .into());
    }
    let resulting = destination.balance + amount;
    if resulting > MAX_BALANCE {
        return Err(ValidationError::ExceedsMaxBalance {
            max: MAX_BALANCE,
            resulting,
        }
        .into());
    }

    source.balance -= amount;
    destination.balance = resulting;
    Ok(TransferStage {
        source,
        destination,
        amount,
    })
}

/// Issue the two rewrites, source first.
///
/// If the second rewrite fails after the first succeeded, the debited
/// amount is gone from the source and was never credited - the store has
/// no compensating write. That outcome is reported as
/// [`OpsError::PartialTransfer`] naming both sides; callers must not
/// assume the legacy sequential-write behavior guaranteed consistency.
pub fn commit<S: AccountStore>(
    store: &S,
    staged: TransferStage,
) -> Result<(Account, Account), OpsError> {
    store.rewrite_at(staged.source.id, &staged.source)?;
    if let Err(err) = store.rewrite_at(staged.destination.id, &staged.destination) {
        return Err(OpsError::PartialTransfer {
            debited: staged.source.id,
            credited: staged.destination.id,
            source: err,
        });
    }
    info!(
        from = staged.source.id,
        to = staged.destination.id,
        amount = %staged.amount,
        "transfer committed"
    );
    Ok((staged.source, staged.destination))
}

/// Stage, confirm with both post-state records, commit.
pub fn transfer<S: AccountStore>(
    store: &S,
    source_id: u32,
    destination_id: u32,
    amount: Decimal,
    confirm: &mut dyn Confirmation,
) -> Result<(Account, Account), OpsError> {
    let staged = stage(store, source_id, destination_id, amount)?;
    let preview = [staged.source().clone(), staged.destination().clone()];
    if !confirm.confirm(&preview) {
        return Err(OpsError::Aborted);
    }
    commit(store, staged)
}
