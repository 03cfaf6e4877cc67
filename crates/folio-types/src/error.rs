//! Error types for the folio terminal.

use std::io;

/// Errors produced by the folio terminal crates.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// The typed name is not in the command registry. The session renders
    /// this as a normal "command not found" output entry, not a failure.
    #[error("command not found: {0}")]
    CommandNotFound(String),

    #[error("command error: {0}")]
    Command(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_not_found_display() {
        let e = FolioError::CommandNotFound("frobnicate".into());
        assert_eq!(format!("{e}"), "command not found: frobnicate");
    }

    #[test]
    fn command_error_display() {
        let e = FolioError::Command("bad args".into());
        assert_eq!(format!("{e}"), "command error: bad args");
    }

    #[test]
    fn config_error_display() {
        let e = FolioError::Config("missing key".into());
        assert_eq!(format!("{e}"), "config error: missing key");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: FolioError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let bad_toml = "this is [[[not valid toml";
        let toml_err = toml::from_str::<toml::Value>(bad_toml).unwrap_err();
        let e: FolioError = toml_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("TOML parse error"));
    }

    #[test]
    fn error_is_debug() {
        let e = FolioError::CommandNotFound("x".into());
        let dbg = format!("{e:?}");
        assert!(dbg.contains("CommandNotFound"));
    }

    #[test]
    fn result_alias_ok() {
        let r: Result<i32> = Ok(42);
        assert_eq!(r.unwrap(), 42);
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(FolioError::Config("oops".into()));
        assert!(r.is_err());
    }
}
