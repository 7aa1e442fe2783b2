//! lxpthread - Linux Thread Naming Shim
//!
//! A C-callable binding for `pthread_setname_np` and `pthread_getname_np`,
//! for language runtimes that cannot reach the platform thread-naming API
//! themselves. Each call goes straight to the host threading library and the
//! status code comes back unchanged.
//!
//! # Quick Start
//!
//! ```rust
//! use lxpthread::{get_thread_name, set_thread_name, ThreadHandle, NAME_MAX_LEN};
//!
//! std::thread::spawn(|| {
//!     let me = ThreadHandle::current();
//!     set_thread_name(me, c"worker-1")?;
//!
//!     let mut buf = [0u8; NAME_MAX_LEN];
//!     assert_eq!(get_thread_name(me, &mut buf)?, c"worker-1");
//!     Ok::<(), lxpthread::ThreadNameError>(())
//! })
//! .join()
//! .unwrap()?;
//! # Ok::<(), lxpthread::ThreadNameError>(())
//! ```
//!
//! # C API
//!
//! ```c
//! #include <lxpthread/lxpthread.h>
//!
//! linux_pthread_setname_np(pthread_self(), "worker-1");
//!
//! char buf[LXPTHREAD_NAME_MAX];
//! linux_pthread_getname_np(pthread_self(), buf, sizeof(buf));
//! ```
//!
//! Names are limited to 15 bytes plus the terminator. Over-long names and
//! short buffers both come back as `ERANGE`.

#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(not(target_os = "linux"))]
compile_error!("lxpthread wraps the Linux pthread naming calls and only builds for Linux");

/// Direct bindings to the thread-naming calls
pub mod binding;
pub mod current;
/// Error types for thread-naming operations
pub mod error;

// Public C API
pub mod c_api;

// Re-exports for Rust consumers

pub use crate::binding::{get_thread_name, set_thread_name, ThreadHandle, NAME_MAX_LEN};
pub use crate::current::{current_thread_name, set_current_thread_name};
pub use crate::error::{Result, ThreadNameError};
