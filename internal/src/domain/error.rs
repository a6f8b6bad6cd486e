use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceReadError {
    #[error("File cannot be opened: {}: {source}", .path.display())]
    CannotOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Buffer memory failed to allocate ({bytes} bytes)")]
    AllocationFailed { bytes: u64 },
    #[error("Short read on {}: expected {expected} byte(s), got {actual}", .path.display())]
    ShortRead {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },
}

#[derive(Error, Debug)]
pub enum SourceServiceError {
    #[error("No input file: no argument contains \"{0}\"")]
    NoInputFile(String),
    #[error(transparent)]
    Read(#[from] SourceReadError),
}
