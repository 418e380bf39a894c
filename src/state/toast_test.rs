use super::*;

#[test]
fn success_and_error_set_the_kind() {
    let mut state = ToastState::default();
    state.success("Equipment added.");
    state.error("Could not add equipment.");

    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].kind, ToastKind::Success);
    assert_eq!(state.toasts[0].message, "Equipment added.");
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn ids_increase_even_after_dismissal() {
    let mut state = ToastState::default();
    state.success("first");
    let first = state.toasts[0].id;
    state.dismiss(first);
    state.success("second");

    assert_eq!(state.toasts.len(), 1);
    assert!(state.toasts[0].id > first);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    state.success("a");
    state.success("b");
    state.success("c");
    let middle = state.toasts[1].id;

    state.dismiss(middle);

    let messages: Vec<&str> = state.toasts.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["a", "c"]);
}

#[test]
fn dismiss_unknown_id_is_a_noop() {
    let mut state = ToastState::default();
    state.success("a");
    state.dismiss(42);
    assert_eq!(state.toasts.len(), 1);
}
