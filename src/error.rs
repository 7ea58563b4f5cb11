// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// A user-supplied countdown could not be turned into a tick count.
    InvalidDuration(String),
}

impl Error {
    /// Returns the message shown to the user when this error surfaces as an alert.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Error::InvalidDuration(input) => {
                format!("\"{input}\" is not a valid duration in seconds")
            }
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::InvalidDuration(e) => write!(f, "Invalid duration: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_error_becomes_config_variant() {
        let parsed: std::result::Result<toml::Table, _> = toml::from_str("not = valid = toml");
        let err: Error = parsed.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn invalid_duration_user_message_quotes_input() {
        let err = Error::InvalidDuration("abc".into());
        assert!(err.user_message().contains("\"abc\""));
    }
}
