//! Application context - the store plus the interactive confirmation.

use crate::render;
use flatbank_core::Account;
use flatbank_ops::Confirmation;
use flatbank_store::{FileStore, RandomDigits, ThreadRandomDigits};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Wires the flat-file store to the command handlers.
pub struct AppContext {
    pub store: FileStore,
    pub numbers: ThreadRandomDigits,
    assume_yes: bool,
}

impl AppContext {
    pub fn new(data_path: impl AsRef<Path>, assume_yes: bool) -> Self {
        Self {
            store: FileStore::new(data_path),
            numbers: RandomDigits::new(),
            assume_yes,
        }
    }

    pub fn confirmation(&self) -> PromptConfirm {
        PromptConfirm {
            assume_yes: self.assume_yes,
        }
    }
}

/// Shows the post-operation record(s) and asks y/N on stdin.
/// With `--yes` the table is still printed but the prompt is skipped.
pub struct PromptConfirm {
    assume_yes: bool,
}

impl Confirmation for PromptConfirm {
    fn confirm(&mut self, preview: &[Account]) -> bool {
        render::table(preview);
        if self.assume_yes {
            return true;
        }
        print!("Perform this operation? [y/N] ");
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y")
    }
}
