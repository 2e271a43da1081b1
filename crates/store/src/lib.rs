//! Flatbank store - the record-oriented storage engine.
//!
//! One flat binary file, no header, a contiguous run of fixed-size records.
//! Record count = file length / `RECORD_SIZE`; a record's position is its
//! 0-based index. The store is strictly single-threaded and assumes
//! exclusive single-process access: no locking, no concurrency token.
//!
//! Layers:
//! - [`codec`] - fixed-width binary encoding of one account
//! - [`store`] - the [`AccountStore`] trait and the flat-file [`FileStore`]
//! - [`keygen`] - next-id assignment and unique account-number generation

pub mod codec;
pub mod error;
pub mod keygen;
pub mod store;

pub use codec::{CodecError, RECORD_SIZE};
pub use error::StoreError;
pub use keygen::{generate_account_number, next_id, DigitSource, RandomDigits, ThreadRandomDigits};
pub use store::{AccountStore, FileStore, Filtered, FilteredScan, Records, Scan};
