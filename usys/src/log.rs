//! Level-filtered logging for user programs.
//!
//! Log lines go to stderr so they never mix with a program's stdout
//! transcript. Levels follow [`uapi::LogLevel`]; anything below the
//! threshold is dropped before formatting.

use core::sync::atomic::{AtomicU8, Ordering};
use uapi::LogLevel;

/// Messages below this level are suppressed.
static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

pub fn set_log_level(level: LogLevel) {
    LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

#[inline]
pub fn should_log(level: LogLevel) -> bool {
    level.enabled(LogLevel::from_u8(LOG_LEVEL.load(Ordering::Relaxed)))
}

#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)*) => {{
        let level: $crate::uapi::LogLevel = $level;
        if $crate::log::should_log(level) {
            use core::fmt::Write as _;
            let mut err = $crate::Stderr;
            let _ = err.write_str(level.tag());
            let _ = write!(err, $($arg)*);
            let _ = err.write_str("\n");
        }
    }};
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => { $crate::log!($crate::uapi::LogLevel::Trace, $($arg)*) };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { $crate::log!($crate::uapi::LogLevel::Debug, $($arg)*) };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::log!($crate::uapi::LogLevel::Info, $($arg)*) };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::log!($crate::uapi::LogLevel::Warn, $($arg)*) };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::log!($crate::uapi::LogLevel::Error, $($arg)*) };
}
