//! Account creation.

use crate::confirm::Confirmation;
use crate::error::OpsError;
use flatbank_core::{validate, Account};
use flatbank_store::{generate_account_number, next_id, AccountStore, DigitSource};
use rust_decimal::Decimal;
use std::slice;
use tracing::info;

/// Validated field values for a new account, as supplied by the caller.
/// The id and account number are assigned here, not by the caller.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub pesel_number: String,
    pub balance: Decimal,
    pub debt: Decimal,
}

/// Create one account: validate fields, assign `id` and account number,
/// confirm, append.
pub fn create<S: AccountStore>(
    store: &S,
    numbers: &mut dyn DigitSource,
    new: NewAccount,
    confirm: &mut dyn Confirmation,
) -> Result<Account, OpsError> {
    validate::name("first name", &new.first_name)?;
    validate::name("last name", &new.last_name)?;
    validate::address(&new.address)?;
    validate::pesel(&new.pesel_number)?;
    validate::stored_amount("initial balance", new.balance)?;
    validate::stored_amount("initial debt", new.debt)?;

    let id = next_id(store)?;
    let account_number = generate_account_number(store, numbers)?;
    let account = Account {
        id,
        account_number,
        first_name: new.first_name,
        last_name: new.last_name,
        address: new.address,
        pesel_number: new.pesel_number,
        balance: new.balance,
        debt: new.debt,
    };

    if !confirm.confirm(slice::from_ref(&account)) {
        return Err(OpsError::Aborted);
    }
    store.append(&account)?;
    info!(id = account.id, number = %account.account_number, "account created");
    Ok(account)
}
