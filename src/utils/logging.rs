//! Logger bootstrap plus module-gated logging macros.
//!
//! Modules opt into verbose logging by declaring a flag before using the macros:
//! ```rust,ignore
//! const ENABLE_LOGS: bool = true;
//!
//! use crate::{log_info, log_warn};
//!
//! log_info!("sampling started");
//! ```

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialise `env_logger` once for the process.
///
/// Honours `RUST_LOG`; without it the level defaults to `Info`. Later calls are
/// no-ops so hosts and tests can both call this freely.
pub fn init_logging() {
    INIT.call_once(|| {
        let result = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .try_init();

        if let Err(err) = result {
            // Another logger was installed by the host.
            log::debug!("logger already initialised: {err}");
        }
    });
}

/// Info logging gated on the calling module's `ENABLE_LOGS`.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

/// Warn logging gated on the calling module's `ENABLE_LOGS`.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}

/// Error logging gated on the calling module's `ENABLE_LOGS`.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::error!($($arg)*);
        }
    };
}

/// Debug logging gated on the calling module's `ENABLE_LOGS`. Used for per-tick
/// chatter that would drown the info stream.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::debug!($($arg)*);
        }
    };
}
