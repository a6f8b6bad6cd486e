use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use log::debug;

use internal::{domain::error::SourceReadError, port::source::SourceDrivenPort};

pub struct FileRepository;

impl SourceDrivenPort for FileRepository {
    /// Materializes the whole file in memory: probe the size through the
    /// end-of-stream offset, reserve exactly that many bytes, then read in
    /// one pass. The handle closes on every exit path when it drops.
    fn read(&self, path: &Path) -> Result<Vec<u8>, SourceReadError> {
        let mut file = File::open(path).map_err(|source| SourceReadError::CannotOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let declared = file
            .seek(SeekFrom::End(0))
            .and_then(|len| file.seek(SeekFrom::Start(0)).map(|_| len))
            .map_err(|source| SourceReadError::CannotOpen {
                path: path.to_path_buf(),
                source,
            })?;

        let capacity = usize::try_from(declared)
            .map_err(|_| SourceReadError::AllocationFailed { bytes: declared })?;
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|_| SourceReadError::AllocationFailed { bytes: declared })?;

        let actual = file
            .read_to_end(&mut buffer)
            .map_err(|source| SourceReadError::CannotOpen {
                path: path.to_path_buf(),
                source,
            })? as u64;
        if actual != declared {
            // The file changed size between the probe and the read.
            return Err(SourceReadError::ShortRead {
                path: path.to_path_buf(),
                expected: declared,
                actual,
            });
        }
        debug!("Read {actual} byte(s) from {}", path.display());
        Ok(buffer)
    }
}
