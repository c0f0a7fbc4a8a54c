//! The four non-fatal status codes and their bit encoding.
//!
//! A code packs two independent bits:
//!
//! - bit 0 ("empty"): the operation produced no usable result
//! - bit 1 ("incomplete"): the task is not finished; the caller may retry
//!
//! OK/NG say whether a result exists; DONE/CONT say whether the caller
//! should come back.

use core::fmt;

/// A non-fatal status code.
///
/// The discriminants are the two flag bits packed into an integer, so a
/// code round-trips through a raw machine word via [`Code::bits`] and
/// [`Code::from_raw`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    /// Result present, task finished.
    OkDone = 0,
    /// No result, task finished (end of stream).
    NgDone = 1,
    /// Result present, task has more to do.
    OkCont = 2,
    /// No result now, retry later (blocked).
    NgCont = 3,
}

impl Code {
    /// Bit 0: set when the operation produced no usable result.
    pub const EMPTY_BIT: u8 = 1 << 0;
    /// Bit 1: set when the task is not finished and may be called again.
    pub const INCOMPLETE_BIT: u8 = 1 << 1;

    // Aliases mirror the vocabulary different call sites reach for; each
    // compares equal to its canonical code.

    /// Alias for [`Code::OkCont`].
    pub const OK_CONTINUE: Self = Self::OkCont;
    /// Alias for [`Code::NgCont`].
    pub const NG_CONTINUE: Self = Self::NgCont;
    /// Alias for [`Code::NgCont`]: retry later.
    pub const NG_RETRY: Self = Self::NgCont;
    /// Alias for [`Code::NgCont`]: blocked on an external condition.
    pub const NG_BLOCKED: Self = Self::NgCont;
    /// Alias for [`Code::NgCont`].
    pub const BLOCKED: Self = Self::NgCont;
    /// Alias for [`Code::NgDone`]: end of stream.
    pub const NG_EOF: Self = Self::NgDone;
    /// Alias for [`Code::NgDone`]: nothing left to do.
    pub const FINISHED: Self = Self::NgDone;

    /// The raw bit pattern.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Whether the empty bit is set (no usable result).
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self as u8 & Self::EMPTY_BIT != 0
    }

    /// Whether the incomplete bit is set (caller may call again).
    #[must_use]
    pub const fn is_incomplete(self) -> bool {
        self as u8 & Self::INCOMPLETE_BIT != 0
    }

    /// Convert from a raw word.
    #[must_use]
    pub const fn from_raw(raw: usize) -> Option<Self> {
        match raw {
            0 => Some(Self::OkDone),
            1 => Some(Self::NgDone),
            2 => Some(Self::OkCont),
            3 => Some(Self::NgCont),
            _ => None,
        }
    }

    /// Canonical name, as rendered by
    /// [`Outcome::code_str`](crate::Outcome::code_str).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OkDone => "OK_DONE",
            Self::NgDone => "NG_EOF",
            Self::OkCont => "OK_CONT",
            Self::NgCont => "NG_BLOCKED",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Code> for usize {
    fn from(code: Code) -> usize {
        code as usize
    }
}

impl TryFrom<usize> for Code {
    type Error = usize;

    /// Fails with the offending raw value.
    fn try_from(raw: usize) -> Result<Self, usize> {
        Self::from_raw(raw).ok_or(raw)
    }
}

/// Render a raw status word for logs.
///
/// Uses the short historical names; any value outside the code range
/// renders as `"(UNKNOWN)"`.
///
/// ```
/// assert_eq!(upshot::code_name(1), "EOF");
/// assert_eq!(upshot::code_name(42), "(UNKNOWN)");
/// ```
#[must_use]
pub const fn code_name(raw: usize) -> &'static str {
    match raw {
        0 => "OK_DONE",
        1 => "EOF",
        2 => "OK_CONT",
        3 => "BLOCKED",
        _ => "(UNKNOWN)",
    }
}
