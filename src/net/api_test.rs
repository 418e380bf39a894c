use super::*;

#[test]
fn default_base_points_at_api() {
    assert_eq!(Api::default().base(), "/api");
}

#[test]
fn new_trims_trailing_slashes() {
    assert_eq!(Api::new("http://localhost:3000/").base(), "http://localhost:3000");
    assert_eq!(Api::new("/api///").base(), "/api");
}

#[test]
fn collection_url_targets_the_resource() {
    let api = Api::new("/api");
    assert_eq!(api.collection_url(), "/api/equipamento");
}

#[test]
fn record_url_appends_the_id() {
    let api = Api::new("http://localhost:3000");
    assert_eq!(api.record_url(7), "http://localhost:3000/equipamento/7");
}

#[test]
fn error_messages_name_the_failure() {
    assert_eq!(
        ApiError::Transport("connection refused".to_owned()).to_string(),
        "request failed: connection refused"
    );
    assert_eq!(ApiError::Status(500).to_string(), "server returned status 500");
    assert_eq!(
        ApiError::Decode("missing field `id`".to_owned()).to_string(),
        "invalid response body: missing field `id`"
    );
}
