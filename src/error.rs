//! Error types for the lxpthread library
use std::fmt;
use std::io;

/// Result type alias for thread-naming operations
pub type Result<T> = std::result::Result<T, ThreadNameError>;

/// A thread-naming call rejected by the OS (or by the string conversion in front of it)
///
/// Every variant that came from libc carries the raw status code so it can be
/// handed back across an FFI boundary untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThreadNameError {
    /// The name exceeds the platform limit (`ERANGE` from set)
    NameTooLong(i32),

    /// The output buffer cannot hold the name plus terminator (`ERANGE` from get)
    BufferTooSmall(i32),

    /// The name cannot be expressed as a C string
    InvalidName(String),

    /// Any other status returned by the threading library
    Os(i32),
}

impl ThreadNameError {
    /// Classify a nonzero status returned by `pthread_setname_np`
    pub fn from_set_status(code: i32) -> Self {
        match code {
            libc::ERANGE => ThreadNameError::NameTooLong(code),
            _ => ThreadNameError::Os(code),
        }
    }

    /// Classify a nonzero status returned by `pthread_getname_np`
    pub fn from_get_status(code: i32) -> Self {
        match code {
            libc::ERANGE => ThreadNameError::BufferTooSmall(code),
            _ => ThreadNameError::Os(code),
        }
    }

    /// The errno value this error stands for
    pub fn code(&self) -> i32 {
        match self {
            ThreadNameError::NameTooLong(code)
            | ThreadNameError::BufferTooSmall(code)
            | ThreadNameError::Os(code) => *code,
            ThreadNameError::InvalidName(_) => libc::EINVAL,
        }
    }
}

impl fmt::Display for ThreadNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThreadNameError::NameTooLong(code) => {
                write!(f, "Thread name too long (errno {})", code)
            }
            ThreadNameError::BufferTooSmall(code) => {
                write!(f, "Buffer too small for thread name (errno {})", code)
            }
            ThreadNameError::InvalidName(msg) => write!(f, "Invalid thread name: {}", msg),
            ThreadNameError::Os(code) => {
                write!(f, "{}", io::Error::from_raw_os_error(*code))
            }
        }
    }
}

impl std::error::Error for ThreadNameError {}

impl From<ThreadNameError> for io::Error {
    fn from(err: ThreadNameError) -> Self {
        match err {
            ThreadNameError::InvalidName(msg) => io::Error::new(io::ErrorKind::InvalidInput, msg),
            other => io::Error::from_raw_os_error(other.code()),
        }
    }
}
