//! Debug hook fired when an error outcome is constructed.
//!
//! Registration follows the `log::set_logger` pattern: one process-wide
//! function pointer, installed at startup, default none. The hook only
//! fires in builds with debug assertions; release builds compile the call
//! out entirely.

use core::ptr;
use core::sync::atomic::{AtomicPtr, Ordering};

/// Callback invoked with the diagnostic of every constructed error
/// outcome.
pub type FaultHook = fn(&'static str);

static HOOK: AtomicPtr<()> = AtomicPtr::new(ptr::null_mut());

/// Install a process-wide fault hook.
///
/// The hook runs inside [`Outcome::from_message`](crate::Outcome::from_message)
/// with the final diagnostic text, before the value is returned. A good
/// place for a debugger breakpoint while chasing where an error is born.
/// Later registrations replace earlier ones.
///
/// ```
/// fn on_fault(message: &'static str) {
///     // breakpoint here
///     let _ = message;
/// }
///
/// upshot::set_fault_hook(on_fault);
/// # upshot::clear_fault_hook();
/// ```
pub fn set_fault_hook(hook: FaultHook) {
    HOOK.store(hook as *mut (), Ordering::Release);
}

/// Remove any installed fault hook.
pub fn clear_fault_hook() {
    HOOK.store(ptr::null_mut(), Ordering::Release);
}

/// Fire the hook, if installed. Compiles out without debug assertions.
#[inline]
pub(crate) fn fire(message: &'static str) {
    if cfg!(debug_assertions) {
        let raw = HOOK.load(Ordering::Acquire);
        if !raw.is_null() {
            // SAFETY: `raw` was stored by `set_fault_hook` from a valid
            // `FaultHook`; fn pointers are non-null and carry no state.
            let hook = unsafe { core::mem::transmute::<*mut (), FaultHook>(raw) };
            hook(message);
        }
    }
}

/// Ready-made hook that prints each diagnostic to stderr.
///
/// ```
/// upshot::set_fault_hook(upshot::stderr_fault_hook);
/// # upshot::clear_fault_hook();
/// ```
#[cfg(feature = "std")]
pub fn stderr_fault_hook(message: &'static str) {
    std::eprintln!("error outcome constructed: {message}");
}
