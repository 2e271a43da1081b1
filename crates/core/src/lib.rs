//! Flatbank core - account entity, money bounds, field validation
//!
//! This crate is pure data: no I/O, no file layout. The `account_store`
//! crate owns the on-disk representation; everything here is the in-memory
//! shape and the business-rule checks shared by every operation.

pub mod account;
pub mod error;
pub mod money;
pub mod validate;

pub use account::Account;
pub use error::ValidationError;
