use super::*;

#[test]
fn push_returns_unique_ids() {
    let mut state = ToastState::default();
    let a = state.push(Notice::error("a"));
    let b = state.push(Notice::error("b"));
    assert_ne!(a, b);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(Notice::error("a"));
    state.push(Notice::success("b"));
    state.dismiss(&a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].notice.message, "b");
}

#[test]
fn push_drops_oldest_beyond_limit() {
    let mut state = ToastState::default();
    for i in 0..(MAX_TOASTS + 2) {
        state.push(Notice::error(format!("n{i}")));
    }
    assert_eq!(state.items.len(), MAX_TOASTS);
    assert_eq!(state.items[0].notice.message, "n2");
}
