//! Internal event hook for the exception bridges.
//!
//! With the `tracing` feature enabled, `trace_event!` forwards to
//! `tracing::trace!`. Without it the macro expands to nothing, so the
//! library performs no output by default.

macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($argument)*);
        }
    };
}

pub(crate) use trace_event;
