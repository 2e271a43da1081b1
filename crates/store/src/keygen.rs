//! ID assignment and unique account-number generation.
//!
//! Both walk the whole store per call. That cost is linear in store size
//! and acceptable at this scale; there is no persisted counter to drift
//! out of sync with the file.

use crate::error::StoreError;
use crate::store::{AccountStore, Scan};
use flatbank_core::account::ACCOUNT_NUMBER_LEN;
use rand::Rng;
use tracing::debug;

/// Next unique id: `max(observed) + 1`, or `1` for an absent or empty store.
///
/// IDs are never reused, so after N creations the result always exceeds
/// every previously assigned id. A store whose highest record already
/// carries `u32::MAX` has no next id left; that reports as
/// [`StoreError::IdsExhausted`] rather than wrapping.
pub fn next_id<S: AccountStore>(store: &S) -> Result<u32, StoreError> {
    let mut last: u32 = 0;
    if let Scan::Records(records) = store.scan()? {
        for record in records {
            let account = record?;
            last = last.max(account.id);
        }
    }
    last.checked_add(1).ok_or(StoreError::IdsExhausted)
}

/// A source of candidate account numbers.
///
/// The generate-then-check-then-retry loop in [`generate_account_number`]
/// is part of the contract; this trait is the seam that lets tests feed a
/// deliberately colliding candidate and watch the retry happen.
pub trait DigitSource {
    /// Produce one candidate of exactly `ACCOUNT_NUMBER_LEN` digits.
    fn candidate(&mut self) -> String;
}

/// Uniform random digits, the production source.
pub struct RandomDigits<R: Rng> {
    rng: R,
}

/// The default thread-local flavor, for callers that do not inject an RNG.
pub type ThreadRandomDigits = RandomDigits<rand::rngs::ThreadRng>;

impl RandomDigits<rand::rngs::ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomDigits<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomDigits<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DigitSource for RandomDigits<R> {
    fn candidate(&mut self) -> String {
        (0..ACCOUNT_NUMBER_LEN)
            .map(|_| char::from(b'0' + self.rng.gen_range(0..10u8)))
            .collect()
    }
}

/// Sample candidates from `source` until one is not already taken by an
/// existing record. Collisions are retried internally and never surface
/// to the caller.
pub fn generate_account_number<S: AccountStore>(
    store: &S,
    source: &mut dyn DigitSource,
) -> Result<String, StoreError> {
    loop {
        let candidate = source.candidate();
        if !number_taken(store, &candidate)? {
            return Ok(candidate);
        }
        debug!(%candidate, "account number collision, retrying");
    }
}

fn number_taken<S: AccountStore>(store: &S, number: &str) -> Result<bool, StoreError> {
    if let Scan::Records(records) = store.scan()? {
        for record in records {
            if record?.account_number == number {
                return Ok(true);
            }
        }
    }
    Ok(false)
}
