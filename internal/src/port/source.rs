use std::path::Path;

use crate::domain::{
    error::{SourceReadError, SourceServiceError},
    source::SourceFile,
};

pub trait SourceDriverPort {
    fn select<'a>(&self, args: &'a [String]) -> Result<&'a str, SourceServiceError>;
    fn load(&self, path: &Path) -> Result<SourceFile, SourceServiceError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait SourceDrivenPort {
    fn read(&self, path: &Path) -> Result<Vec<u8>, SourceReadError>;
}
