//! Errors and error-related utilities.

use std::path::{Path, PathBuf};
use std::{error, fmt, io};

/// A path that could not be inspected, listed, opened, or read.
///
/// These errors are never fatal: the offending path is reported and skipped.
#[derive(Debug)]
pub struct PathError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl PathError {
    pub fn new(path: &Path, source: io::Error) -> PathError {
        PathError {
            path: path.to_owned(),
            source,
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.source)
    }
}

impl error::Error for PathError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<walkdir::Error> for PathError {
    fn from(e: walkdir::Error) -> PathError {
        let path = e.path().map(Path::to_owned).unwrap_or_default();
        let source = match e.into_io_error() {
            Some(source) => source,
            None => io::Error::other("filesystem loop detected"),
        };
        PathError { path, source }
    }
}
