//! Field and amount validation shared by account creation and the cash verbs.

use crate::account::{ACCOUNT_NUMBER_LEN, ADDRESS_LEN, NAME_LEN, PESEL_LEN};
use crate::error::ValidationError;
use crate::money::{has_cent_precision, MAX_BALANCE, MIN_AMOUNT};
use rust_decimal::Decimal;

/// A name: non-empty, letters and spaces only, at most `NAME_LEN` bytes.
pub fn name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.len() > NAME_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: NAME_LEN,
            len: value.len(),
        });
    }
    if !value.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(ValidationError::NonAlphabetic {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// An address: non-empty free text, at most `ADDRESS_LEN` bytes.
pub fn address(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field: "address" });
    }
    if value.len() > ADDRESS_LEN {
        return Err(ValidationError::TooLong {
            field: "address",
            max: ADDRESS_LEN,
            len: value.len(),
        });
    }
    Ok(())
}

/// A PESEL: exactly 11 ASCII digits. No checksum validation is performed.
pub fn pesel(value: &str) -> Result<(), ValidationError> {
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PeselNotDigits);
    }
    if value.len() != PESEL_LEN {
        return Err(ValidationError::BadPeselLength {
            expected: PESEL_LEN,
            len: value.len(),
        });
    }
    Ok(())
}

/// An account number: exactly 8 ASCII digits.
pub fn account_number(value: &str) -> Result<(), ValidationError> {
    if value.len() != ACCOUNT_NUMBER_LEN || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::BadAccountNumber {
            expected: ACCOUNT_NUMBER_LEN,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// An operation amount: at least `MIN_AMOUNT`, whole cents.
pub fn amount(value: Decimal) -> Result<(), ValidationError> {
    if !has_cent_precision(value) {
        return Err(ValidationError::BadPrecision { amount: value });
    }
    if value < MIN_AMOUNT {
        return Err(ValidationError::AmountTooSmall {
            min: MIN_AMOUNT,
            amount: value,
        });
    }
    Ok(())
}

/// A balance or debt at rest: `0.00 ..= MAX_BALANCE`, whole cents.
///
/// Unlike `amount`, zero is allowed - a fresh account may open with nothing.
pub fn stored_amount(field: &'static str, value: Decimal) -> Result<(), ValidationError> {
    if !has_cent_precision(value) {
        return Err(ValidationError::BadPrecision { amount: value });
    }
    if value < Decimal::ZERO || value > MAX_BALANCE {
        return Err(ValidationError::OutOfRange {
            field,
            min: Decimal::ZERO,
            max: MAX_BALANCE,
            value,
        });
    }
    Ok(())
}
