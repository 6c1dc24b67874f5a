use super::*;

#[test]
fn network_error_maps_to_connection_notice() {
    let notice = notice_for(&ApiError::Network("failed to fetch".to_owned())).unwrap();
    assert_eq!(notice, Notice::error(CONNECTION_ERROR));
}

#[test]
fn session_expired_is_a_warning() {
    let notice = notice_for(&ApiError::SessionExpired).unwrap();
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert_eq!(notice.message, SESSION_EXPIRED);
}

#[test]
fn server_error_uses_generic_server_text() {
    let notice = notice_for(&ApiError::Server { status: 502, message: "bad gateway".to_owned() }).unwrap();
    assert_eq!(notice.message, SERVER_ERROR);
}

#[test]
fn validation_notice_carries_extracted_message() {
    let err = ApiError::Validation { message: "ya registrado".to_owned(), fields: Vec::new() };
    assert_eq!(notice_for(&err).unwrap().message, "ya registrado");
}

#[test]
fn session_level_errors_are_not_notified() {
    assert!(notice_for(&ApiError::NoActiveSession).is_none());
    assert!(notice_for(&ApiError::ConcurrentMutation).is_none());
    assert!(notice_for(&ApiError::MalformedCache("x".to_owned())).is_none());
}

#[test]
fn level_css_classes_are_distinct() {
    let classes = [NoticeLevel::Info, NoticeLevel::Success, NoticeLevel::Warning, NoticeLevel::Error]
        .map(NoticeLevel::css_class);
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
