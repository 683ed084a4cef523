use std::path::{Path, PathBuf};

/// Every variant matches a type of error we
/// want the end-user to see.
// Note: errors from external crates should be wrapped
// here so that we have full control over the error
// messages printed to the user.
#[derive(Debug)]
pub enum Error {
    ReadError {
        path: PathBuf,
        io_error: std::io::Error,
    },
    WriteError {
        path: PathBuf,
        io_error: std::io::Error,
    },

    MalformedResolved {
        path: PathBuf,
        details: String,
    },

    UnsupportedResolvedVersion {
        path: PathBuf,
        found: u64,
        supported: u64,
    },

    PinNotFound {
        path: PathBuf,
        name: String,
    },

    Other {
        message: String,
    },
}

pub fn new_error(message: String) -> Error {
    Error::Other { message }
}

pub fn new_read_error(error: std::io::Error, path: &Path) -> Error {
    Error::ReadError {
        path: path.to_path_buf(),
        io_error: error,
    }
}

pub fn new_write_error(error: std::io::Error, path: &Path) -> Error {
    Error::WriteError {
        path: path.to_path_buf(),
        io_error: error,
    }
}

/// Implement Display for our Error type
// Note: this is a not-so-bad way to make sure every error message is consistent
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let message = match self {
            Error::Other { message } => message.to_string(),

            Error::ReadError { path, io_error } => {
                format!("could not read {}: {}", path.display(), io_error)
            }
            Error::WriteError { path, io_error } => {
                format!("could not write {}: {}", path.display(), io_error)
            }

            Error::MalformedResolved { path, details } => {
                format!("could not parse {}: {}", path.display(), details)
            }

            Error::UnsupportedResolvedVersion {
                path,
                found,
                supported,
            } => format!(
                "{} uses version {} but pinbump supports version {}",
                path.display(),
                found,
                supported
            ),

            Error::PinNotFound { path, name } => format!(
                "{} does not contain a pin named \"{}\"",
                path.display(),
                name
            ),
        };
        write!(f, "{}", message)
    }
}
