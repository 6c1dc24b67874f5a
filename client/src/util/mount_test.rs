use super::*;

#[test]
fn detached_guard_starts_alive() {
    assert!(MountGuard::detached().is_alive());
}

#[test]
fn release_is_seen_by_clones() {
    let guard = MountGuard::detached();
    let task_copy = guard.clone();
    guard.release();
    assert!(!task_copy.is_alive());
}
