//! Tests for `src/logging.rs`.

use autoagent::logging::{init_console, init_server, LoggingGuard};

#[test]
fn logging_guard_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<LoggingGuard>();
}

#[test]
fn init_server_creates_logs_dir() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let logs_dir = tmp.path().join("logs");
    assert!(!logs_dir.exists());

    // Only one global subscriber per process; a second install errors but
    // the directory is created first either way.
    let _result = init_server(&logs_dir, "info");
    assert!(logs_dir.exists(), "logs directory should be created");
}

#[test]
fn init_console_twice_is_harmless() {
    init_console("debug");
    init_console("warn");
}
