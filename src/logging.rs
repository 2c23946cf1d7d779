// Logging setup and conditional logging macros. The debug/info macros are only
// active in debug builds; warnings are always emitted.

use log::LevelFilter;

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        log::warn!($($arg)*);
    };
}

/// Level used when `RUST_LOG` is unset.
#[must_use]
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Installs the env_logger backend. `RUST_LOG` still overrides the default.
/// Calling this more than once is harmless.
pub fn init_logging(verbose: bool) {
    let _ = env_logger::Builder::new()
        .filter_level(default_level(verbose))
        .parse_default_env()
        .format_target(false)
        .try_init();
}
