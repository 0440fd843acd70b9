use thiserror::Error;

/// Errors raised by the scanners.
///
/// Malformed or unbalanced Go text is never an error; scans always finish
/// with whatever they found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("scan cancelled at line {line}")]
    Cancelled { line: usize },
}
