//! Integration tests for the thread-naming shim
//!
//! These drive the exported C entry points and the Rust API on real threads,
//! and read names back through /proc to check they are visible system-wide.

use lxpthread::c_api::{linux_pthread_getname_np, linux_pthread_setname_np, LXPTHREAD_NAME_MAX};
use lxpthread::{get_thread_name, set_thread_name, ThreadHandle, ThreadNameError, NAME_MAX_LEN};
use std::ffi::CStr;
use std::os::raw::c_char;
use std::sync::{mpsc, Arc, Barrier};
use std::thread;

fn c_get(thread: libc::pthread_t, len: usize) -> (i32, String) {
    let mut buf = vec![0 as c_char; len.max(1)];
    let rc = unsafe { linux_pthread_getname_np(thread, buf.as_mut_ptr(), len) };
    let name = unsafe { CStr::from_ptr(buf.as_ptr()) }
        .to_string_lossy()
        .into_owned();
    (rc, name)
}

fn proc_comm() -> String {
    let tid = unsafe { libc::syscall(libc::SYS_gettid) };
    std::fs::read_to_string(format!("/proc/self/task/{}/comm", tid))
        .unwrap()
        .trim_end()
        .to_string()
}

#[test]
fn test_set_then_get_worker_name() {
    thread::spawn(|| {
        let me = unsafe { libc::pthread_self() };
        let rc = unsafe { linux_pthread_setname_np(me, c"worker-1".as_ptr()) };
        assert_eq!(rc, 0);

        let (rc, name) = c_get(me, 16);
        assert_eq!(rc, 0);
        assert_eq!(name, "worker-1");
    })
    .join()
    .unwrap();
}

#[test]
fn test_twenty_char_name_rejected_and_old_name_kept() {
    thread::spawn(|| {
        let me = unsafe { libc::pthread_self() };
        assert_eq!(unsafe { linux_pthread_setname_np(me, c"worker-1".as_ptr()) }, 0);

        let rc = unsafe { linux_pthread_setname_np(me, c"abcdefghijklmnopqrst".as_ptr()) };
        assert_eq!(rc, libc::ERANGE);

        let (rc, name) = c_get(me, 16);
        assert_eq!(rc, 0);
        assert_eq!(name, "worker-1");
    })
    .join()
    .unwrap();
}

#[test]
fn test_two_byte_buffer_rejected() {
    thread::spawn(|| {
        let me = unsafe { libc::pthread_self() };
        assert_eq!(unsafe { linux_pthread_setname_np(me, c"worker-1".as_ptr()) }, 0);

        let (rc, _) = c_get(me, 2);
        assert_eq!(rc, libc::ERANGE);
    })
    .join()
    .unwrap();
}

#[test]
fn test_name_visible_in_proc() {
    thread::spawn(|| {
        set_thread_name(ThreadHandle::current(), c"proc-visible").unwrap();
        assert_eq!(proc_comm(), "proc-visible");
    })
    .join()
    .unwrap();
}

#[test]
fn test_rename_is_seen_by_other_thread() {
    let barrier = Arc::new(Barrier::new(2));
    let (handle_tx, handle_rx) = mpsc::channel();

    let child_barrier = Arc::clone(&barrier);
    let child = thread::spawn(move || {
        handle_tx.send(ThreadHandle::current()).unwrap();
        // 1: parent may rename us
        child_barrier.wait();
        // 2: parent is done reading
        child_barrier.wait();
        proc_comm()
    });

    let target = handle_rx.recv().unwrap();
    barrier.wait();

    set_thread_name(target, c"from-parent").unwrap();
    let mut buf = [0u8; NAME_MAX_LEN];
    assert_eq!(get_thread_name(target, &mut buf).unwrap(), c"from-parent");

    // No shadow copy: a second rename is visible immediately
    set_thread_name(target, c"again").unwrap();
    assert_eq!(get_thread_name(target, &mut buf).unwrap(), c"again");

    barrier.wait();
    assert_eq!(child.join().unwrap(), "again");
}

#[test]
fn test_threads_named_independently() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let name = format!("pool-{}", i);
                lxpthread::set_current_thread_name(&name).unwrap();
                thread::yield_now();
                assert_eq!(lxpthread::current_thread_name().unwrap(), name);
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}

#[test]
fn test_rust_and_c_surfaces_agree() {
    thread::spawn(|| {
        let me = ThreadHandle::current();
        set_thread_name(me, c"rust-side").unwrap();

        let (rc, name) = c_get(me.as_raw(), LXPTHREAD_NAME_MAX);
        assert_eq!(rc, 0);
        assert_eq!(name, "rust-side");

        let err = set_thread_name(me, c"0123456789abcdef").unwrap_err();
        let rc = unsafe { linux_pthread_setname_np(me.as_raw(), c"0123456789abcdef".as_ptr()) };
        assert_eq!(err.code(), rc);
        assert!(matches!(err, ThreadNameError::NameTooLong(_)));
    })
    .join()
    .unwrap();
}
