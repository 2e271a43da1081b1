//! Fixed-width binary record codec.
//!
//! One account encodes to exactly [`RECORD_SIZE`] bytes, always in the same
//! field order. Text fields occupy their full declared width with the
//! remainder NUL-padded; numeric fields are little-endian fixed width, with
//! amounts stored as signed 64-bit minor units (cents). The encoding is
//! deterministic: equal logical values produce identical bytes, which is
//! what lets the store rely on byte-for-byte record boundaries instead of
//! delimiters.

use flatbank_core::account::{ACCOUNT_NUMBER_LEN, ADDRESS_LEN, NAME_LEN, PESEL_LEN};
use flatbank_core::Account;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

const ID_WIDTH: usize = 4;
const AMOUNT_WIDTH: usize = 8;

// MAX_BALANCE expressed in minor units; the storable range for any amount.
const MAX_MINOR_UNITS: i64 = 99_999_999;

/// Size in bytes of one encoded record.
pub const RECORD_SIZE: usize = ID_WIDTH
    + ACCOUNT_NUMBER_LEN
    + NAME_LEN
    + NAME_LEN
    + ADDRESS_LEN
    + PESEL_LEN
    + AMOUNT_WIDTH
    + AMOUNT_WIDTH;

/// Errors from encoding or decoding one record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("record buffer must be exactly {expected} bytes, got {got}")]
    WrongSize { expected: usize, got: usize },

    #[error("{field} does not fit its {max}-byte field (got {len} bytes)")]
    FieldTooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    #[error("{field} is not valid UTF-8")]
    BadText { field: &'static str },

    #[error("{field} has non-NUL bytes after the terminator")]
    BadPadding { field: &'static str },

    #[error("{field} cannot be stored as whole cents: {value}")]
    BadAmount { field: &'static str, value: Decimal },

    #[error("{field} is outside the storable range 0.00 to 999999.99: {value}")]
    AmountOutOfRange { field: &'static str, value: Decimal },
}

/// Encode one account into a fixed-size record.
///
/// Over-width fields are an error, never silent truncation.
pub fn encode(account: &Account) -> Result<[u8; RECORD_SIZE], CodecError> {
    let mut buf = [0u8; RECORD_SIZE];
    let mut at = 0;

    buf[at..at + ID_WIDTH].copy_from_slice(&account.id.to_le_bytes());
    at += ID_WIDTH;

    at = put_text(
        &mut buf,
        at,
        "account_number",
        &account.account_number,
        ACCOUNT_NUMBER_LEN,
    )?;
    at = put_text(&mut buf, at, "first_name", &account.first_name, NAME_LEN)?;
    at = put_text(&mut buf, at, "last_name", &account.last_name, NAME_LEN)?;
    at = put_text(&mut buf, at, "address", &account.address, ADDRESS_LEN)?;
    at = put_text(
        &mut buf,
        at,
        "pesel_number",
        &account.pesel_number,
        PESEL_LEN,
    )?;
    at = put_amount(&mut buf, at, "balance", account.balance)?;
    at = put_amount(&mut buf, at, "debt", account.debt)?;

    debug_assert_eq!(at, RECORD_SIZE);
    Ok(buf)
}

/// Decode a buffer that was produced by [`encode`].
///
/// A buffer of the wrong size, non-UTF-8 text, or junk after a field's NUL
/// terminator is an error. No partial decode.
pub fn decode(buf: &[u8]) -> Result<Account, CodecError> {
    if buf.len() != RECORD_SIZE {
        return Err(CodecError::WrongSize {
            expected: RECORD_SIZE,
            got: buf.len(),
        });
    }
    let mut at = 0;

    let id = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    at += ID_WIDTH;

    let (account_number, at) = take_text(buf, at, "account_number", ACCOUNT_NUMBER_LEN)?;
    let (first_name, at) = take_text(buf, at, "first_name", NAME_LEN)?;
    let (last_name, at) = take_text(buf, at, "last_name", NAME_LEN)?;
    let (address, at) = take_text(buf, at, "address", ADDRESS_LEN)?;
    let (pesel_number, at) = take_text(buf, at, "pesel_number", PESEL_LEN)?;
    let (balance, at) = take_amount(buf, at, "balance")?;
    let (debt, at) = take_amount(buf, at, "debt")?;

    debug_assert_eq!(at, RECORD_SIZE);
    Ok(Account {
        id,
        account_number,
        first_name,
        last_name,
        address,
        pesel_number,
        balance,
        debt,
    })
}

fn put_text(
    buf: &mut [u8],
    at: usize,
    field: &'static str,
    value: &str,
    width: usize,
) -> Result<usize, CodecError> {
    let bytes = value.as_bytes();
    if bytes.len() > width {
        return Err(CodecError::FieldTooLong {
            field,
            max: width,
            len: bytes.len(),
        });
    }
    buf[at..at + bytes.len()].copy_from_slice(bytes);
    // remainder stays zeroed
    Ok(at + width)
}

fn take_text(
    buf: &[u8],
    at: usize,
    field: &'static str,
    width: usize,
) -> Result<(String, usize), CodecError> {
    let slice = &buf[at..at + width];
    let end = slice.iter().position(|&b| b == 0).unwrap_or(width);
    if slice[end..].iter().any(|&b| b != 0) {
        return Err(CodecError::BadPadding { field });
    }
    let text = std::str::from_utf8(&slice[..end])
        .map_err(|_| CodecError::BadText { field })?
        .to_string();
    Ok((text, at + width))
}

fn put_amount(
    buf: &mut [u8],
    at: usize,
    field: &'static str,
    value: Decimal,
) -> Result<usize, CodecError> {
    let cents = to_minor_units(field, value)?;
    buf[at..at + AMOUNT_WIDTH].copy_from_slice(&cents.to_le_bytes());
    Ok(at + AMOUNT_WIDTH)
}

fn take_amount(
    buf: &[u8],
    at: usize,
    field: &'static str,
) -> Result<(Decimal, usize), CodecError> {
    let mut bytes = [0u8; AMOUNT_WIDTH];
    bytes.copy_from_slice(&buf[at..at + AMOUNT_WIDTH]);
    let cents = i64::from_le_bytes(bytes);
    if !(0..=MAX_MINOR_UNITS).contains(&cents) {
        return Err(CodecError::AmountOutOfRange {
            field,
            value: Decimal::new(cents, 2),
        });
    }
    Ok((Decimal::new(cents, 2), at + AMOUNT_WIDTH))
}

fn to_minor_units(field: &'static str, value: Decimal) -> Result<i64, CodecError> {
    let scaled = value
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(CodecError::BadAmount { field, value })?;
    if scaled.fract() != Decimal::ZERO {
        return Err(CodecError::BadAmount { field, value });
    }
    let cents = scaled.to_i64().ok_or(CodecError::BadAmount { field, value })?;
    if !(0..=MAX_MINOR_UNITS).contains(&cents) {
        return Err(CodecError::AmountOutOfRange { field, value });
    }
    Ok(cents)
}
