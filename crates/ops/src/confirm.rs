//! Confirmation seam between the verbs and whatever drives them.

use flatbank_core::Account;

/// Asks whoever is driving whether to commit a prepared operation.
///
/// The verbs hand over the post-operation record(s) so the driver can show
/// the user exactly what will be written. Declining yields
/// [`crate::OpsError::Aborted`].
pub trait Confirmation {
    fn confirm(&mut self, preview: &[Account]) -> bool;
}

/// Accepts everything without asking. For non-interactive callers and tests.
pub struct AutoConfirm;

impl Confirmation for AutoConfirm {
    fn confirm(&mut self, _preview: &[Account]) -> bool {
        true
    }
}
