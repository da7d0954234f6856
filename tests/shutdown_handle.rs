use std::time::Duration;

use jikannoto_core::shutdown::ShutdownHandle;

#[tokio::test]
async fn starts_running() {
    let handle = ShutdownHandle::new();
    assert!(!handle.is_shutting_down());
}

#[tokio::test]
async fn signal_sets_flag_for_all_clones() {
    let handle = ShutdownHandle::new();
    let clone = handle.clone();
    handle.signal();
    assert!(clone.is_shutting_down());
}

#[tokio::test]
async fn wait_returns_immediately_when_already_signaled() {
    let handle = ShutdownHandle::new();
    handle.signal();
    tokio::time::timeout(Duration::from_millis(100), handle.wait())
        .await
        .expect("wait must not block after signal");
}

#[tokio::test]
async fn wait_wakes_on_signal_from_clone() {
    let handle = ShutdownHandle::new();
    let clone = handle.clone();

    let waiter = tokio::spawn(async move { handle.wait().await });
    tokio::time::sleep(Duration::from_millis(20)).await;
    clone.signal();

    tokio::time::timeout(Duration::from_secs(1), waiter)
        .await
        .expect("waiter must wake")
        .unwrap();
}

#[tokio::test]
async fn repeated_signal_is_idempotent() {
    let handle = ShutdownHandle::new();
    handle.signal();
    handle.signal();
    assert!(handle.is_shutting_down());
}
