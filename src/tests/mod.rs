//! Unit tests for the outcome word.

mod codes;

#[cfg(feature = "alloc")]
mod record;

// Send/Sync static assertions

const _: () = {
    const fn is_send_sync<T: Send + Sync>() {}

    is_send_sync::<crate::Code>();
    is_send_sync::<crate::Outcome>();
    is_send_sync::<crate::Fault>();
};
