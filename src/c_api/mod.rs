//! C API for lxpthread
//!
//! This module provides a stable C ABI for runtimes that cannot reach the
//! Linux thread-naming calls directly. Both entry points forward to libc and
//! hand the status code back unchanged.

use crate::binding::{raw_get, raw_set};
use std::os::raw::{c_char, c_int};

/// Maximum thread name size on Linux, including the NUL terminator
pub const LXPTHREAD_NAME_MAX: usize = 16;

/// Set the name of a thread
///
/// # Parameters
/// * `thread` - The thread whose name is to be changed
/// * `name` - The new name (null-terminated C string, must not be NULL)
///
/// # Returns
/// * 0 on success
/// * `ERANGE` if `name` is longer than `LXPTHREAD_NAME_MAX - 1` bytes
/// * `EINVAL` if `name` is NULL
/// * Any other errno reported by the threading library
///
/// # Safety
/// * `name` must be NULL or a valid null-terminated C string
/// * `thread` must refer to a live thread
///
/// # Example
/// ```c
/// int rc = linux_pthread_setname_np(pthread_self(), "worker-1");
/// if (rc != 0) {
///     fprintf(stderr, "setname failed: %s\n", strerror(rc));
/// }
/// ```
#[no_mangle]
pub unsafe extern "C" fn linux_pthread_setname_np(
    thread: libc::pthread_t,
    name: *const c_char,
) -> c_int {
    if name.is_null() {
        return libc::EINVAL;
    }
    raw_set(thread, name)
}

/// Retrieve the name of a thread
///
/// # Parameters
/// * `thread` - The thread whose name is to be retrieved
/// * `name` - Buffer receiving the null-terminated name (must not be NULL)
/// * `len` - Number of bytes available in `name`
///
/// # Returns
/// * 0 on success
/// * `ERANGE` if `len` is too small to hold the name and terminator
/// * `EINVAL` if `name` is NULL
/// * Any other errno reported by the threading library
///
/// # Safety
/// * `name` must be NULL or valid for writes of `len` bytes
/// * `thread` must refer to a live thread
///
/// # Example
/// ```c
/// char buf[LXPTHREAD_NAME_MAX];
/// if (linux_pthread_getname_np(pthread_self(), buf, sizeof(buf)) == 0) {
///     printf("running on %s\n", buf);
/// }
/// ```
#[no_mangle]
pub unsafe extern "C" fn linux_pthread_getname_np(
    thread: libc::pthread_t,
    name: *mut c_char,
    len: libc::size_t,
) -> c_int {
    if name.is_null() {
        return libc::EINVAL;
    }
    raw_get(thread, name, len)
}
