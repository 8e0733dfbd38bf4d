use thiserror::Error;

/// Errors produced while generating, counting or reporting samples.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid range: low ({low}) is greater than high ({high})")]
    InvalidRange { low: i64, high: i64 },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True when the underlying writer's reader has closed.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Error::Io(e) => e.kind() == std::io::ErrorKind::BrokenPipe,
            Error::Json(e) => e.io_error_kind() == Some(std::io::ErrorKind::BrokenPipe),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::io::{self, ErrorKind};

    use super::*;

    #[test]
    fn test_broken_pipe_detection() {
        let closed = Error::from(io::Error::new(ErrorKind::BrokenPipe, "closed"));
        assert!(closed.is_broken_pipe());

        let denied = Error::from(io::Error::new(ErrorKind::PermissionDenied, "denied"));
        assert!(!denied.is_broken_pipe());
        assert!(!Error::InvalidRange { low: 2, high: 1 }.is_broken_pipe());
    }

    #[test]
    fn test_broken_pipe_through_json_writer() {
        let json = serde_json::to_writer(ClosedPipe, &[1, 2, 3]).unwrap_err();
        assert!(Error::from(json).is_broken_pipe());
    }

    struct ClosedPipe;

    impl io::Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
