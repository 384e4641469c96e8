//! Errors that occur while building or writing tables

use read::ReadError;

use crate::validate::ValidationReport;

/// An error occurred while building or writing this table
#[derive(Debug)]
pub enum Error {
    /// A setter was passed a value that cannot be stored in its field.
    InvalidArgument { field: &'static str, value: i32 },
    ValidationFailed(ValidationReport),
    /// The validated counts could not be applied to the table data.
    Read(ReadError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidArgument { field, value } => {
                write!(f, "invalid value {value} for '{field}'")
            }
            Error::ValidationFailed(report) => std::fmt::Display::fmt(report, f),
            Error::Read(error) => write!(f, "failed to read table: {error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Read(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<ValidationReport> for Error {
    fn from(src: ValidationReport) -> Error {
        Error::ValidationFailed(src)
    }
}

impl From<ReadError> for Error {
    fn from(src: ReadError) -> Error {
        Error::Read(src)
    }
}
