//! Allocation-free outcome word for operations that can succeed with
//! data, succeed without data, ask to be retried, or fail with a static
//! diagnostic.
//!
//! # Overview
//!
//! [`Outcome`] is the universal return value for call sites that need to
//! distinguish four non-error outcomes cheaply, alongside an open-ended
//! error outcome. The four status codes pack two independent bits,
//! has-result × is-finished:
//!
//! | code                | meaning                      |
//! |---------------------|------------------------------|
//! | [`Outcome::OK_DONE`] | result present, finished     |
//! | [`Outcome::NG_DONE`] | no result, finished (EOF)    |
//! | [`Outcome::OK_CONT`] | result present, more to come |
//! | [`Outcome::NG_CONT`] | no result now, retry later   |
//!
//! The error variant carries a reference to statically allocated
//! diagnostic text; nothing is heap-allocated and the whole value is
//! `Copy`. Errors are terminal: they always report "no results" and
//! "finished", never "retry".
//!
//! # Features
//!
//! - `std` (default): the stderr fault hook convenience
//! - `alloc`: [`OutcomeRecord`] owned snapshots for structured logging
//! - `serde`: serialization for [`OutcomeRecord`]
//! - (none): the core value type, fully `no_std`
//!
//! # Example
//!
//! A pull loop drives itself off the returned outcome: consume on OK,
//! come back on CONT, stop on DONE, surface the diagnostic on error.
//!
//! ```
//! use upshot::Outcome;
//!
//! fn pull(buf: &mut Vec<u32>, src: &mut impl Iterator<Item = u32>) -> Outcome {
//!     match src.next() {
//!         Some(v) => {
//!             buf.push(v);
//!             Outcome::OK_CONT
//!         }
//!         None => Outcome::EOF,
//!     }
//! }
//!
//! let mut src = [1, 2, 3].into_iter();
//! let mut buf = Vec::new();
//! loop {
//!     let rc = pull(&mut buf, &mut src);
//!     if rc.is_error() {
//!         panic!("{}", rc.message().unwrap());
//!     }
//!     if rc.is_finished() {
//!         break;
//!     }
//! }
//! assert_eq!(buf, [1, 2, 3]);
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod code;
mod hook;
mod outcome;

#[cfg(feature = "alloc")]
mod record;

/// Construct an error [`Outcome`] with the source location appended.
///
/// `fault!("msg")` produces the diagnostic `"msg in <file>:<line>"`,
/// composed at compile time into a single static string; nothing is
/// allocated. Goes through [`Outcome::from_message`], so the
/// [fault hook](set_fault_hook) fires in debug builds.
///
/// ```
/// use upshot::fault;
///
/// let rc = fault!("Hand crafted error");
/// assert!(rc.is_error());
/// assert!(rc.message().unwrap().starts_with("Hand crafted error in "));
/// ```
#[macro_export]
macro_rules! fault {
    ($msg:literal) => {
        $crate::Outcome::from_message(concat!($msg, " in ", file!(), ":", line!()))
    };
}

/// Return early with an error [`Outcome`], source location appended.
///
/// ```
/// use upshot::{bail, Outcome};
///
/// fn open(path: &str) -> Outcome {
///     if path.is_empty() {
///         bail!("empty path");
///     }
///     Outcome::OK_DONE
/// }
///
/// let rc = open("");
/// assert!(rc.is_error());
/// assert!(rc.message().unwrap().starts_with("empty path in "));
/// ```
#[macro_export]
macro_rules! bail {
    ($msg:literal) => {
        return $crate::Outcome::from_message(concat!($msg, " in ", file!(), ":", line!()))
    };
}

/// Guard clause: return an error [`Outcome`] unless the condition holds.
///
/// The one-argument form renders the condition's source text as
/// `"Prereq '<condition>' failed in <file>:<line>"`; the two-argument
/// form uses a custom message with the location appended. Active in all
/// builds — use [`debug_ensure!`] for checks that should vanish in
/// release.
///
/// ```
/// use upshot::{ensure, Outcome};
///
/// fn positive(x: i32) -> Outcome {
///     ensure!(x > 0);
///     Outcome::OK_DONE
/// }
///
/// assert!(positive(5).is_ok());
/// let rc = positive(-1);
/// assert!(rc.message().unwrap().starts_with("Prereq 'x > 0' failed in "));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr) => {
        if !($cond) {
            return $crate::Outcome::from_message(concat!(
                "Prereq '",
                stringify!($cond),
                "' failed in ",
                file!(),
                ":",
                line!()
            ));
        }
    };
    ($cond:expr, $msg:literal) => {
        if !($cond) {
            return $crate::Outcome::from_message(concat!($msg, " in ", file!(), ":", line!()));
        }
    };
}

/// Like [`ensure!`], with `"Assertion '<condition>' failed"` wording,
/// compiled to a no-op when debug assertions are disabled.
///
/// Without debug assertions the condition is still type-checked but never
/// evaluated, matching `debug_assert!`.
///
/// ```
/// use upshot::{debug_ensure, Outcome};
///
/// fn checked(x: i32, y: i32) -> Outcome {
///     debug_ensure!(x == y);
///     Outcome::OK_DONE
/// }
///
/// assert!(checked(2, 2).is_ok());
/// # #[cfg(debug_assertions)]
/// assert!(checked(1, 2)
///     .message()
///     .unwrap()
///     .starts_with("Assertion 'x == y' failed in "));
/// ```
#[macro_export]
macro_rules! debug_ensure {
    ($cond:expr) => {
        if cfg!(debug_assertions) && !($cond) {
            return $crate::Outcome::from_message(concat!(
                "Assertion '",
                stringify!($cond),
                "' failed in ",
                file!(),
                ":",
                line!()
            ));
        }
    };
}

pub use code::{code_name, Code};
pub use hook::{clear_fault_hook, set_fault_hook, FaultHook};
pub use outcome::{Fault, Outcome};

#[cfg(feature = "std")]
pub use hook::stderr_fault_hook;

#[cfg(feature = "alloc")]
pub use record::OutcomeRecord;

/// Common imports for typical usage.
///
/// ```
/// use upshot::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{bail, debug_ensure, ensure, fault, Code, Outcome};
}

#[cfg(test)]
mod tests;
