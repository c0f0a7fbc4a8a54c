//! The outcome word itself: a status code or a static diagnostic.

use core::fmt;

use crate::code::{code_name, Code};
use crate::hook;

/// Result of an operation that can succeed with data, succeed without
/// data, ask to be called again, or fail with a diagnostic.
///
/// The value is a plain `Copy` word with no owned resources: pass it by
/// value, across threads, and drop it anywhere. Error diagnostics are
/// references to statically allocated text, never freed. A caller loop
/// reads it as: consume on [`is_ok`](Outcome::is_ok), call again on
/// [`is_blocked`](Outcome::is_blocked), stop on
/// [`is_finished`](Outcome::is_finished), surface the
/// [`message`](Outcome::message) on [`is_error`](Outcome::is_error).
///
/// A default-constructed outcome is the error `"(not initialized)"`, so a
/// forgotten assignment reads as a failure instead of a success.
///
/// ```
/// use upshot::{Code, Outcome};
///
/// let rc = Outcome::from_code(Code::OkCont);
/// assert!(rc.is_ok());
/// assert!(!rc.is_finished());
/// assert_eq!(rc.code_str(), "OK_CONT");
///
/// let rc = Outcome::from_message("permission denied");
/// assert!(rc.is_error());
/// assert_eq!(rc.message(), Some("permission denied"));
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// One of the four non-fatal status codes.
    Status(Code),
    /// Terminal failure carrying a static diagnostic.
    ///
    /// Constructing through [`Outcome::from_message`] (or the
    /// [`fault!`](crate::fault)/[`bail!`](crate::bail) macros) additionally
    /// fires the [fault hook](crate::set_fault_hook).
    Error(&'static str),
}

impl Outcome {
    /// Result present, finished.
    pub const OK_DONE: Self = Self::Status(Code::OkDone);
    /// Result present, more to come.
    pub const OK_CONT: Self = Self::Status(Code::OkCont);
    /// No result, finished.
    pub const NG_DONE: Self = Self::Status(Code::NgDone);
    /// No result now, retry later.
    pub const NG_CONT: Self = Self::Status(Code::NgCont);
    /// Alias for [`Outcome::NG_DONE`]: end of stream.
    pub const EOF: Self = Self::NG_DONE;
    /// Alias for [`Outcome::NG_CONT`]: blocked, come back later.
    pub const BLOCKED: Self = Self::NG_CONT;

    /// Diagnostic carried by a default-constructed outcome.
    pub const NOT_INITIALIZED: &'static str = "(not initialized)";

    /// Wrap a status code.
    pub const fn from_code(code: Code) -> Self {
        Self::Status(code)
    }

    /// Construct an error from a statically allocated diagnostic.
    ///
    /// Fires the [fault hook](crate::set_fault_hook) in builds with debug
    /// assertions. The [`fault!`](crate::fault) and
    /// [`bail!`](crate::bail) macros call this with the source location
    /// already appended; use them at call sites that want self-locating
    /// diagnostics.
    pub fn from_message(message: &'static str) -> Self {
        hook::fire(message);
        Self::Error(message)
    }

    /// Whether this is the error variant.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Complement of [`is_error`](Self::is_error).
    #[must_use]
    pub const fn no_error(&self) -> bool {
        !self.is_error()
    }

    /// A usable result exists: not an error, and the empty bit is clear.
    #[must_use]
    pub const fn has_results(&self) -> bool {
        match self {
            Self::Status(code) => !code.is_empty(),
            Self::Error(_) => false,
        }
    }

    /// No usable result: an error, or the empty bit is set.
    ///
    /// Errors always report "no results" — error is stricter than NG.
    #[must_use]
    pub const fn has_no_results(&self) -> bool {
        !self.has_results()
    }

    /// The task needs no further calls: an error, or the incomplete bit
    /// is clear.
    ///
    /// Errors are terminal, never retryable, so an error is always
    /// finished even though it also reports "no results".
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        match self {
            Self::Status(code) => !code.is_incomplete(),
            Self::Error(_) => true,
        }
    }

    /// The caller may (or should) call again: not an error, and the
    /// incomplete bit is set.
    #[must_use]
    pub const fn is_not_finished(&self) -> bool {
        !self.is_finished()
    }

    /// Alias for [`is_not_finished`](Self::is_not_finished).
    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        self.is_not_finished()
    }

    /// Alias for [`has_results`](Self::has_results): the success test.
    ///
    /// True exactly when the operation produced usable data and did not
    /// error.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.has_results()
    }

    /// Alias for [`has_no_results`](Self::has_no_results).
    #[must_use]
    pub const fn is_ng(&self) -> bool {
        self.has_no_results()
    }

    /// Alias for [`is_finished`](Self::is_finished).
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.is_finished()
    }

    /// The status code, unless this is an error.
    #[must_use]
    pub const fn code(&self) -> Option<Code> {
        match self {
            Self::Status(code) => Some(*code),
            Self::Error(_) => None,
        }
    }

    /// The diagnostic message, if this is an error.
    ///
    /// `None` for every status code; status codes carry no free text.
    /// Never panics.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Error(message) => Some(*message),
            Self::Status(_) => None,
        }
    }

    /// Canonical name of the stored value: `"ERROR"` for any error,
    /// otherwise the code name (`"OK_DONE"`, `"NG_EOF"`, `"OK_CONT"`,
    /// `"NG_BLOCKED"`).
    #[must_use]
    pub const fn code_str(&self) -> &'static str {
        match self {
            Self::Error(_) => "ERROR",
            Self::Status(code) => code.as_str(),
        }
    }

    /// Copy the value into `slot` and return it unchanged, so a call site
    /// can test and capture in one expression:
    ///
    /// ```
    /// use upshot::Outcome;
    ///
    /// let mut last = Outcome::default();
    /// let rc = Outcome::OK_CONT;
    /// if rc.capture(&mut last).is_ok() {
    ///     assert_eq!(last, rc);
    /// }
    /// ```
    pub fn capture(self, slot: &mut Outcome) -> Self {
        *slot = self;
        self
    }

    /// View as a `Result`, pairing outcome-style call chains with `?`.
    ///
    /// ```
    /// use upshot::{Code, Outcome};
    ///
    /// fn step() -> Result<Code, upshot::Fault> {
    ///     let code = Outcome::OK_DONE.into_result()?;
    ///     Ok(code)
    /// }
    ///
    /// assert_eq!(step(), Ok(Code::OkDone));
    /// ```
    pub const fn into_result(self) -> Result<Code, Fault> {
        match self {
            Self::Status(code) => Ok(code),
            Self::Error(message) => Err(Fault(message)),
        }
    }
}

impl Default for Outcome {
    /// The sentinel error, so an unset outcome fails loudly.
    fn default() -> Self {
        Self::Error(Self::NOT_INITIALIZED)
    }
}

impl fmt::Display for Outcome {
    /// The diagnostic for errors, the short historical code name
    /// otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(message) => f.write_str(message),
            Self::Status(code) => f.write_str(code_name(code.bits() as usize)),
        }
    }
}

impl From<Code> for Outcome {
    fn from(code: Code) -> Self {
        Self::Status(code)
    }
}

impl From<Fault> for Outcome {
    fn from(fault: Fault) -> Self {
        Self::Error(fault.0)
    }
}

impl From<Result<Code, Fault>> for Outcome {
    fn from(result: Result<Code, Fault>) -> Self {
        match result {
            Ok(code) => Self::Status(code),
            Err(fault) => Self::Error(fault.0),
        }
    }
}

/// A terminal diagnostic as a standalone error type.
///
/// Wraps the same static message an [`Outcome::Error`] carries and
/// implements [`core::error::Error`], so outcome diagnostics can cross
/// `?` boundaries and sit inside `Box<dyn Error>` chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fault(&'static str);

impl Fault {
    /// Wrap a statically allocated diagnostic.
    #[must_use]
    pub const fn new(message: &'static str) -> Self {
        Self(message)
    }

    /// The diagnostic text.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl core::error::Error for Fault {}
