//! The account entity and its declared field widths.

use crate::error::ValidationError;
use crate::validate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum byte width of a first or last name.
pub const NAME_LEN: usize = 50;

/// Maximum byte width of an address.
pub const ADDRESS_LEN: usize = 150;

/// Exact digit count of a PESEL number.
pub const PESEL_LEN: usize = 11;

/// Exact digit count of an account number.
pub const ACCOUNT_NUMBER_LEN: usize = 8;

/// One bank account.
///
/// `id` and `account_number` are assigned once at creation and never change;
/// every other field may be rewritten in place. There is no delete - an
/// account exists for the lifetime of the store file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique, monotonically assigned, never reused.
    pub id: u32,
    /// Unique 8-digit numeric string, assigned once at creation.
    pub account_number: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    /// 11-digit national ID, captured as free text (no checksum validation).
    pub pesel_number: String,
    /// Invariant at rest: `0.00 <= balance <= MAX_BALANCE`.
    pub balance: Decimal,
    /// Invariant at rest: `0.00 <= debt <= MAX_BALANCE`.
    pub debt: Decimal,
}

impl Account {
    /// Check every field against its declared bounds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::name("first name", &self.first_name)?;
        validate::name("last name", &self.last_name)?;
        validate::address(&self.address)?;
        validate::pesel(&self.pesel_number)?;
        validate::account_number(&self.account_number)?;
        validate::stored_amount("balance", self.balance)?;
        validate::stored_amount("debt", self.debt)?;
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({} {}) balance {} debt {}",
            self.id, self.account_number, self.first_name, self.last_name, self.balance, self.debt
        )
    }
}
