//! Naming helpers for the calling thread
//!
//! Worker threads usually label themselves once at start-up so the name shows
//! up in `top -H`, `gdb` and `/proc/<pid>/task/*/comm`. These helpers take
//! Rust strings and go through [`crate::binding`].

use crate::binding::{get_thread_name, set_thread_name, ThreadHandle, NAME_MAX_LEN};
use crate::error::{Result, ThreadNameError};
use std::ffi::CString;

/// Set the OS-visible name of the calling thread
///
/// # Example
/// ```rust
/// std::thread::spawn(|| {
///     lxpthread::set_current_thread_name("ingest-0").unwrap();
///     assert_eq!(lxpthread::current_thread_name().unwrap(), "ingest-0");
/// })
/// .join()
/// .unwrap();
/// ```
pub fn set_current_thread_name(name: &str) -> Result<()> {
    let cname = CString::new(name).map_err(|e| {
        ThreadNameError::InvalidName(format!("nul byte at position {}", e.nul_position()))
    })?;

    set_thread_name(ThreadHandle::current(), &cname).inspect_err(|err| {
        log::debug!("could not name thread {:?}: {}", name, err);
    })
}

/// Name of the calling thread as reported by the OS
///
/// Non-UTF-8 bytes are replaced, since the kernel stores raw bytes.
pub fn current_thread_name() -> Result<String> {
    let mut buf = [0u8; NAME_MAX_LEN];
    match get_thread_name(ThreadHandle::current(), &mut buf) {
        Ok(name) => Ok(name.to_string_lossy().into_owned()),
        Err(err) => {
            log::debug!("could not read thread name: {}", err);
            Err(err)
        }
    }
}
