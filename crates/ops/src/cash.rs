//! Single-account cash verbs: deposit, withdrawal, loan, debt payment.

use crate::confirm::Confirmation;
use crate::error::OpsError;
use flatbank_core::money::{MAX_BALANCE, MAX_LOAN};
use flatbank_core::{validate, Account, ValidationError};
use flatbank_store::AccountStore;
use rust_decimal::Decimal;
use std::slice;
use tracing::info;

/// `balance += amount`, rejected if the result would exceed `MAX_BALANCE`.
pub fn deposit<S: AccountStore>(
    store: &S,
    id: u32,
    amount: Decimal,
    confirm: &mut dyn Confirmation,
) -> Result<Account, OpsError> {
    validate::amount(amount)?;
    let mut account = fetch(store, id)?;

    let resulting = account.balance + amount;
    if resulting > MAX_BALANCE {
        return Err(ValidationError::ExceedsMaxBalance {
            max: MAX_BALANCE,
            resulting,
        }
        .into());
    }
    account.balance = resulting;

    write_back(store, account, confirm, "deposit applied")
}

/// `balance -= amount`, rejected if `amount` exceeds the balance.
pub fn withdraw<S: AccountStore>(
    store: &S,
    id: u32,
    amount: Decimal,
    confirm: &mut dyn Confirmation,
) -> Result<Account, OpsError> {
    validate::amount(amount)?;
    let mut account = fetch(store, id)?;

    if amount > account.balance {
        return Err(ValidationError::InsufficientFunds {
            requested: amount,
            available: account.balance,
        }
        .into());
    }
    account.balance -= amount;

    write_back(store, account, confirm, "withdrawal applied")
}

/// `balance += principal`; `debt += principal * (1 + rate)`.
///
/// The owed amount is rounded to whole cents before it is added to the
/// debt, since the store keeps amounts in minor units.
pub fn take_loan<S: AccountStore>(
    store: &S,
    id: u32,
    principal: Decimal,
    rate: Decimal,
    confirm: &mut dyn Confirmation,
) -> Result<Account, OpsError> {
    validate::amount(principal)?;
    if principal > MAX_LOAN {
        return Err(ValidationError::LoanTooLarge {
            max: MAX_LOAN,
            principal,
        }
        .into());
    }
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(ValidationError::BadInterestRate { rate }.into());
    }
    let mut account = fetch(store, id)?;

    let resulting_balance = account.balance + principal;
    if resulting_balance > MAX_BALANCE {
        return Err(ValidationError::ExceedsMaxBalance {
            max: MAX_BALANCE,
            resulting: resulting_balance,
        }
        .into());
    }
    let owed = (principal * (Decimal::ONE + rate)).round_dp(2);
    let resulting_debt = account.debt + owed;
    if resulting_debt > MAX_BALANCE {
        return Err(ValidationError::ExceedsMaxDebt {
            max: MAX_BALANCE,
            resulting: resulting_debt,
        }
        .into());
    }
    account.balance = resulting_balance;
    account.debt = resulting_debt;

    write_back(store, account, confirm, "loan granted")
}

/// `balance -= payment`; `debt = max(0, debt - payment)`.
///
/// Requires outstanding debt and rejects payments above
/// `min(balance, debt)`.
pub fn pay_debt<S: AccountStore>(
    store: &S,
    id: u32,
    payment: Decimal,
    confirm: &mut dyn Confirmation,
) -> Result<Account, OpsError> {
    validate::amount(payment)?;
    let mut account = fetch(store, id)?;

    if account.debt <= Decimal::ZERO {
        return Err(ValidationError::NoDebt.into());
    }
    if payment > account.balance {
        return Err(ValidationError::InsufficientFunds {
            requested: payment,
            available: account.balance,
        }
        .into());
    }
    if payment > account.debt {
        return Err(ValidationError::PaymentExceedsDebt {
            requested: payment,
            debt: account.debt,
        }
        .into());
    }
    account.balance -= payment;
    account.debt = (account.debt - payment).max(Decimal::ZERO);

    write_back(store, account, confirm, "debt payment applied")
}

fn fetch<S: AccountStore>(store: &S, id: u32) -> Result<Account, OpsError> {
    store.find_by_id(id)?.ok_or(OpsError::NotFound(id))
}

fn write_back<S: AccountStore>(
    store: &S,
    account: Account,
    confirm: &mut dyn Confirmation,
    done: &'static str,
) -> Result<Account, OpsError> {
    if !confirm.confirm(slice::from_ref(&account)) {
        return Err(OpsError::Aborted);
    }
    store.rewrite_at(account.id, &account)?;
    info!(id = account.id, balance = %account.balance, debt = %account.debt, "{done}");
    Ok(account)
}
