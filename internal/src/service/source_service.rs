use std::path::Path;

use log::debug;

use crate::{
    domain::{error::SourceServiceError, source::SourceFile},
    port::source::{SourceDrivenPort, SourceDriverPort},
};

pub struct SourceService<R: SourceDrivenPort> {
    repository: R,
    extension: String,
}

impl<R: SourceDrivenPort> SourceDriverPort for SourceService<R> {
    /// Scans the arguments in order and keeps the last one whose text
    /// contains the configured extension.
    fn select<'a>(&self, args: &'a [String]) -> Result<&'a str, SourceServiceError> {
        args.iter()
            .filter(|arg| arg.contains(&self.extension))
            .next_back()
            .map(String::as_str)
            .inspect(|path| debug!("Selected input file {path}"))
            .ok_or_else(|| SourceServiceError::NoInputFile(self.extension.clone()))
    }

    fn load(&self, path: &Path) -> Result<SourceFile, SourceServiceError> {
        let bytes = self.repository.read(path)?;
        debug!("Read {} byte(s) from {}", bytes.len(), path.display());
        Ok(SourceFile {
            path: path.to_path_buf(),
            bytes,
        })
    }
}

impl<R: SourceDrivenPort> SourceService<R> {
    pub fn new(repository: R, extension: String) -> Self {
        SourceService {
            repository,
            extension,
        }
    }
}
