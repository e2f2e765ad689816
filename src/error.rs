use std::io;

use thiserror::Error;

/// Everything that can go wrong while talking to the user.
#[derive(Debug, Error)]
pub enum Error {
    /// The output sink rejected the prompt (or the newline after a password).
    #[error("writing prompt: {0}")]
    Write(#[source] io::Error),

    /// The input source could not produce a line, end of stream included.
    #[error("reading input: {0}")]
    Read(#[source] io::Error),

    /// The no-echo read of a password failed, mode switching included.
    #[error("reading password: {0}")]
    ReadPassword(#[source] io::Error),

    /// The line was read fine but is not one of y, yes, n, no.
    #[error("invalid confirmation input")]
    InvalidConfirmation,

    /// Password entry was requested on something other than the process stdin.
    #[error("password input requires the process standard input")]
    NotStdin,
}

impl Error {
    pub fn is_invalid_confirmation(&self) -> bool {
        matches!(self, Error::InvalidConfirmation)
    }

    /// Whether the input side failed, for a plain line or a password.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Error::Read(_) | Error::ReadPassword(_))
    }

    /// The underlying I/O failure for `Write`, `Read` and `ReadPassword`.
    pub fn io_cause(&self) -> Option<&io::Error> {
        match self {
            Error::Write(err) | Error::Read(err) | Error::ReadPassword(err) => Some(err),
            Error::InvalidConfirmation | Error::NotStdin => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_display_wraps_cause() {
        let err = Error::Read(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        assert_eq!(err.to_string(), "reading input: end of input");
        assert!(err.source().is_some());
        assert_eq!(err.io_cause().map(io::Error::kind), Some(io::ErrorKind::UnexpectedEof));
    }

    #[test]
    fn test_sentinel_has_no_cause() {
        let err = Error::InvalidConfirmation;
        assert!(err.is_invalid_confirmation());
        assert!(err.source().is_none());
        assert!(err.io_cause().is_none());
        assert!(!Error::NotStdin.is_invalid_confirmation());
    }

    #[test]
    fn test_password_read_has_its_own_message() {
        let err = Error::ReadPassword(io::Error::new(io::ErrorKind::Other, "not a tty"));
        assert_eq!(err.to_string(), "reading password: not a tty");
        assert!(err.is_read_failure());
        assert!(err.io_cause().is_some());
        assert!(!Error::Write(io::Error::new(io::ErrorKind::Other, "x")).is_read_failure());
    }
}
