#![cfg_attr(not(test), no_std)]

pub mod nr {
    pub const EXIT: usize = 2; // exit(status)
    pub const WRITE_FD: usize = 6; // write(fd, buf, len) -> n or usize::MAX
    pub const PRINT_INT: usize = 14; // print_int(value) -> 0
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SysErr {
    Fail,
}

pub type SysResult<T> = core::result::Result<T, SysErr>;

#[inline(always)]
pub const fn is_err_sentinel(v: usize) -> bool {
    v == usize::MAX
}

/// Severity of a log line. Ordered from most to least verbose.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Parse a level name as written on the command line (`loglevel=debug`).
    pub fn parse(s: &str) -> Option<LogLevel> {
        match s {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    pub const fn from_u8(v: u8) -> LogLevel {
        match v {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }

    /// Whether a message at this level passes a `threshold` filter.
    #[inline]
    pub const fn enabled(self, threshold: LogLevel) -> bool {
        self as u8 >= threshold as u8
    }

    pub const fn tag(self) -> &'static str {
        match self {
            LogLevel::Trace => "[TRACE] ",
            LogLevel::Debug => "[DEBUG] ",
            LogLevel::Info => "[INFO]  ",
            LogLevel::Warn => "[WARN]  ",
            LogLevel::Error => "[ERROR] ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_levels() {
        assert_eq!(LogLevel::parse("trace"), Some(LogLevel::Trace));
        assert_eq!(LogLevel::parse("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("info"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("warn"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("error"), Some(LogLevel::Error));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(LogLevel::parse(""), None);
        assert_eq!(LogLevel::parse("INFO"), None);
        assert_eq!(LogLevel::parse("verbose"), None);
    }

    #[test]
    fn test_u8_round_trip_saturates() {
        assert_eq!(LogLevel::from_u8(LogLevel::Warn as u8), LogLevel::Warn);
        assert_eq!(LogLevel::from_u8(200), LogLevel::Error);
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_enabled_threshold() {
        assert!(LogLevel::Info.enabled(LogLevel::Info));
        assert!(LogLevel::Error.enabled(LogLevel::Info));
        assert!(!LogLevel::Debug.enabled(LogLevel::Info));
        assert!(LogLevel::Trace.enabled(LogLevel::Trace));
        assert!(!LogLevel::Warn.enabled(LogLevel::Error));
    }

    #[test]
    fn test_error_sentinel() {
        assert!(is_err_sentinel(usize::MAX));
        assert!(!is_err_sentinel(0));
    }
}
