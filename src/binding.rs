//! Direct bindings to the Linux thread-naming calls
//!
//! Each function here is one call into the host threading library. Nothing is
//! validated, cached or retried: the kernel owns the name and serializes
//! concurrent renames, so every query re-enters the OS.

use crate::error::{Result, ThreadNameError};
use std::ffi::CStr;
use std::os::raw::c_char;
use std::os::unix::thread::JoinHandleExt;
use std::thread::JoinHandle;

/// Maximum thread name size on Linux, including the NUL terminator
pub const NAME_MAX_LEN: usize = 16;

/// Opaque OS thread identifier
///
/// Wraps a `pthread_t` without ever looking inside it. The handle does not
/// own or keep the thread alive; naming a thread that has already been joined
/// is up to the OS to reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ThreadHandle(libc::pthread_t);

impl ThreadHandle {
    /// Handle of the calling thread
    pub fn current() -> Self {
        // SAFETY: pthread_self has no preconditions and cannot fail
        ThreadHandle(unsafe { libc::pthread_self() })
    }

    /// Wrap a raw `pthread_t` obtained elsewhere
    pub const fn from_raw(raw: libc::pthread_t) -> Self {
        ThreadHandle(raw)
    }

    /// The raw `pthread_t`, unchanged
    pub const fn as_raw(self) -> libc::pthread_t {
        self.0
    }
}

impl<T> From<&JoinHandle<T>> for ThreadHandle {
    fn from(handle: &JoinHandle<T>) -> Self {
        ThreadHandle(handle.as_pthread_t())
    }
}

/// Set the OS-visible name of `thread`
///
/// Names longer than `NAME_MAX_LEN - 1` bytes are rejected by the OS with
/// [`ThreadNameError::NameTooLong`] and the previous name stays in place.
pub fn set_thread_name(thread: ThreadHandle, name: &CStr) -> Result<()> {
    // SAFETY: `name` is a valid NUL-terminated string for the whole call
    let status = unsafe { raw_set(thread.as_raw(), name.as_ptr()) };
    if status == 0 {
        Ok(())
    } else {
        Err(ThreadNameError::from_set_status(status))
    }
}

/// Read the OS-visible name of `thread` into `buf`
///
/// The caller provides the storage; on success the returned string borrows
/// from `buf`. A buffer shorter than [`NAME_MAX_LEN`] is rejected by glibc
/// with [`ThreadNameError::BufferTooSmall`] before anything is written.
pub fn get_thread_name(thread: ThreadHandle, buf: &mut [u8]) -> Result<&CStr> {
    // SAFETY: the pointer and length describe exactly the caller's slice
    let status = unsafe { raw_get(thread.as_raw(), buf.as_mut_ptr().cast(), buf.len()) };
    if status != 0 {
        return Err(ThreadNameError::from_get_status(status));
    }

    CStr::from_bytes_until_nul(buf).map_err(|_| ThreadNameError::Os(libc::EINVAL))
}

/// Forward to `pthread_setname_np`
///
/// # Safety
/// `name` must point to a valid NUL-terminated string.
#[inline]
pub(crate) unsafe fn raw_set(thread: libc::pthread_t, name: *const c_char) -> libc::c_int {
    libc::pthread_setname_np(thread, name)
}

/// Forward to `pthread_getname_np`
///
/// # Safety
/// `name` must be valid for writes of `len` bytes.
#[inline]
pub(crate) unsafe fn raw_get(
    thread: libc::pthread_t,
    name: *mut c_char,
    len: libc::size_t,
) -> libc::c_int {
    libc::pthread_getname_np(thread, name, len)
}
