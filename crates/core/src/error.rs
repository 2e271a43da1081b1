//! Validation errors
//!
//! Every variant carries the offending value and the violated bound, so a
//! rejected operation can report how far it was from succeeding instead of
//! a bare failure flag.

use rust_decimal::Decimal;
use thiserror::Error;

/// A field or amount violated a stated invariant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} must contain only letters and spaces: {value:?}")]
    NonAlphabetic { field: &'static str, value: String },

    #[error("{field} exceeds {max} bytes (got {len})")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    #[error("PESEL must be exactly {expected} digits, got {len}")]
    BadPeselLength { expected: usize, len: usize },

    #[error("PESEL must contain only digits (0-9)")]
    PeselNotDigits,

    #[error("account number must be exactly {expected} digits, got {value:?}")]
    BadAccountNumber { expected: usize, value: String },

    #[error("amount must be at least {min}, got {amount}")]
    AmountTooSmall { min: Decimal, amount: Decimal },

    #[error("amount has more than 2 decimal places: {amount}")]
    BadPrecision { amount: Decimal },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: Decimal,
        max: Decimal,
        value: Decimal,
    },

    #[error("insufficient funds: requested {requested}, available balance {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("operation would exceed the maximum balance of {max}: resulting balance {resulting}")]
    ExceedsMaxBalance { max: Decimal, resulting: Decimal },

    #[error("operation would exceed the maximum debt of {max}: resulting debt {resulting}")]
    ExceedsMaxDebt { max: Decimal, resulting: Decimal },

    #[error("loan principal exceeds the maximum of {max}: {principal}")]
    LoanTooLarge { max: Decimal, principal: Decimal },

    #[error("interest rate must be between 0 and 1, got {rate}")]
    BadInterestRate { rate: Decimal },

    #[error("cannot transfer to the same account (id {id})")]
    SameAccount { id: u32 },

    #[error("no debt to pay on this account")]
    NoDebt,

    #[error("payment exceeds outstanding debt: requested {requested}, debt {debt}")]
    PaymentExceedsDebt { requested: Decimal, debt: Decimal },
}
