//! Logging shims over the `log` facade.
//!
//! With the `logging` feature off the macros only type-check their
//! arguments, so call sites stay free of `cfg` attributes.

macro_rules! trace_log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        log::trace!($($arg)*);
        #[cfg(not(feature = "logging"))]
        let _ = format_args!($($arg)*);
    }};
}

macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        log::debug!($($arg)*);
        #[cfg(not(feature = "logging"))]
        let _ = format_args!($($arg)*);
    }};
}

macro_rules! info_log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        log::info!($($arg)*);
        #[cfg(not(feature = "logging"))]
        let _ = format_args!($($arg)*);
    }};
}

pub(crate) use {debug_log, info_log, trace_log};
