//! Conditional logging macros.
//!
//! With the `tracing` feature these re-export the `tracing` macros,
//! otherwise they expand to nothing. The no-op macros carry private names
//! and are re-exported as `debug`/`warn`, since a bare `warn` import
//! collides with the built-in `#[warn]` attribute.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! noop_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! noop_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {noop_debug as debug, noop_warn as warn};
