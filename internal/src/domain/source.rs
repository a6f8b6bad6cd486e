use std::path::PathBuf;

/// A source file materialized in memory, either the full on-disk content
/// or nothing at all.
#[derive(Debug, PartialEq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}
