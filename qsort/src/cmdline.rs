use core::fmt;
use uapi::LogLevel;

/// Settings taken from `key=value` program arguments.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Options {
    pub log_level: LogLevel,
}

impl Default for Options {
    fn default() -> Self {
        Options { log_level: LogLevel::Info }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OptionError<'a> {
    UnknownOption(&'a str),
    BadLogLevel(&'a str),
}

impl fmt::Display for OptionError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownOption(s) => write!(f, "unknown option '{}'", s),
            OptionError::BadLogLevel(s) => write!(f, "bad log level '{}'", s),
        }
    }
}

impl Options {
    /// Parse arguments (program name already stripped). Bad arguments are
    /// handed to `report` and skipped; the rest still apply.
    pub fn parse<'a, I, F>(args: I, mut report: F) -> Options
    where
        I: IntoIterator<Item = &'a str>,
        F: FnMut(OptionError<'a>),
    {
        let mut opts = Options::default();
        for param in args {
            if let Some(v) = param.strip_prefix("loglevel=") {
                match LogLevel::parse(v) {
                    Some(level) => opts.log_level = level,
                    None => report(OptionError::BadLogLevel(v)),
                }
            } else {
                report(OptionError::UnknownOption(param));
            }
        }
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_all<'a>(args: &[&'a str]) -> (Options, Vec<OptionError<'a>>) {
        let mut errors = Vec::new();
        let opts = Options::parse(args.iter().copied(), |e| errors.push(e));
        (opts, errors)
    }

    #[test]
    fn test_no_args_gives_defaults() {
        let (opts, errors) = parse_all(&[]);
        assert_eq!(opts, Options::default());
        assert_eq!(opts.log_level, LogLevel::Info);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_loglevel() {
        let (opts, errors) = parse_all(&["loglevel=debug"]);
        assert_eq!(opts.log_level, LogLevel::Debug);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_last_loglevel_wins() {
        let (opts, _) = parse_all(&["loglevel=trace", "loglevel=error"]);
        assert_eq!(opts.log_level, LogLevel::Error);
    }

    #[test]
    fn test_bad_loglevel_keeps_previous() {
        let (opts, errors) = parse_all(&["loglevel=warn", "loglevel=loud"]);
        assert_eq!(opts.log_level, LogLevel::Warn);
        assert_eq!(errors, vec![OptionError::BadLogLevel("loud")]);
    }

    #[test]
    fn test_unknown_option_skipped() {
        let (opts, errors) = parse_all(&["--fast", "loglevel=debug"]);
        assert_eq!(opts.log_level, LogLevel::Debug);
        assert_eq!(errors, vec![OptionError::UnknownOption("--fast")]);
    }

    #[test]
    fn test_every_bad_argument_reported() {
        let (opts, errors) = parse_all(&["a", "loglevel=", "loglevel=trace", "b=1"]);
        assert_eq!(opts.log_level, LogLevel::Trace);
        assert_eq!(
            errors,
            vec![
                OptionError::UnknownOption("a"),
                OptionError::BadLogLevel(""),
                OptionError::UnknownOption("b=1"),
            ]
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            OptionError::UnknownOption("x").to_string(),
            "unknown option 'x'"
        );
        assert_eq!(
            OptionError::BadLogLevel("").to_string(),
            "bad log level ''"
        );
    }
}
