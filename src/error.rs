use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions that stop a run before any pack content is written.
#[derive(Error, Debug)]
pub enum PackError {
    #[error("Too many files ({count}). Max is {max}.")]
    TooManyFiles { count: usize, max: usize },

    #[error("Not a file or missing: {path}")]
    NotAFile { path: String },

    #[error(
        "Context pack too large (>{max_bytes} bytes). Reduce files or raise --max-bytes cautiously."
    )]
    TooLarge { max_bytes: u64 },

    #[error("Invalid config file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Failed to read file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PackError {
    /// Process exit code for this failure.
    ///
    /// Validation failures use 2; unexpected I/O uses the generic 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            PackError::Read { .. } => 1,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, PackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_exit_with_two() {
        assert_eq!(PackError::TooManyFiles { count: 6, max: 5 }.exit_code(), 2);
        assert_eq!(PackError::NotAFile { path: "x".into() }.exit_code(), 2);
        assert_eq!(PackError::TooLarge { max_bytes: 10 }.exit_code(), 2);
    }

    #[test]
    fn read_errors_exit_with_one() {
        let err = PackError::Read {
            path: PathBuf::from("locked.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("locked.txt"));
    }

    #[test]
    fn messages_name_counts_and_limits() {
        let msg = PackError::TooManyFiles { count: 7, max: 5 }.to_string();
        assert_eq!(msg, "Too many files (7). Max is 5.");

        let msg = PackError::TooLarge { max_bytes: 800_000 }.to_string();
        assert!(msg.contains(">800000 bytes"));
    }
}
