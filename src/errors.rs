use miette::Diagnostic;
use thiserror::Error;

/// Filesystem operation that failed, used to label [`IoError`] diagnostics.
#[derive(Debug, Error, Diagnostic)]
pub enum FileOperation {
    #[error("read")]
    Read,
    #[error("write")]
    Write,
    #[error("create directory")]
    Mkdir,
}

/// An unclassified filesystem failure. Anything other than a missing
/// migration source ends up here and aborts the run.
#[derive(Debug, Error, Diagnostic)]
#[error("{operation} failed for '{path}'")]
#[diagnostic(
    code(docmigrate::io),
    help("Check permissions and free space on the docs tree.")
)]
pub struct IoError {
    pub operation: FileOperation,
    pub path: std::path::PathBuf,
    #[source]
    pub source: std::io::Error,
}
impl IoError {
    pub fn new(operation: FileOperation, path: std::path::PathBuf, error: std::io::Error) -> Self {
        Self {
            operation,
            path,
            source: error,
        }
    }
}
