//! Owned snapshot of an outcome for structured logging.

use alloc::string::{String, ToString};

use crate::Outcome;

/// A serializable snapshot of an [`Outcome`].
///
/// Outcomes borrow their diagnostic text for the life of the program, so
/// they serialize but cannot deserialize in place. `OutcomeRecord` owns
/// its fields and derives both directions under the `serde` feature.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutcomeRecord {
    /// Canonical code name (`"OK_DONE"`, `"NG_EOF"`, `"OK_CONT"`,
    /// `"NG_BLOCKED"`, or `"ERROR"`).
    pub code: String,
    /// Diagnostic message, present only for errors.
    pub message: Option<String>,
    /// Whether a usable result exists.
    pub ok: bool,
    /// Whether the task needs no further calls.
    pub finished: bool,
}

impl From<&Outcome> for OutcomeRecord {
    fn from(outcome: &Outcome) -> Self {
        Self {
            code: outcome.code_str().to_string(),
            message: outcome.message().map(ToString::to_string),
            ok: outcome.is_ok(),
            finished: outcome.is_finished(),
        }
    }
}
