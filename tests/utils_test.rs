use nin::error::Error;
use nin::types::{Envelope, LoginResponse, OfflineItem, SendMailRequest};
use nin::utils::*;

// Helper function to turn a command line into owned words
fn words(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

#[test]
fn test_compute_md5_hash() {
    // Known digests
    assert_eq!(compute_md5_hash(""), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(
        compute_md5_hash("password"),
        "5f4dcc3b5aa765d61d8327deb882cf99"
    );

    // Always lowercase hex, 32 characters
    let hash = compute_md5_hash("Süßes Passwort");
    assert_eq!(hash.len(), 32);
    assert!(hash.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

#[test]
fn test_split_item_without_note() {
    let (task, note) = split_item(&words("Buy milk"));
    assert_eq!(task, "Buy milk");
    assert_eq!(note, "");
}

#[test]
fn test_split_item_with_note() {
    let (task, note) = split_item(&words("Buy milk // two liters, organic"));
    assert_eq!(task, "Buy milk");
    assert_eq!(note, "two liters, organic");
}

#[test]
fn test_split_item_only_first_separator_counts() {
    let (task, note) = split_item(&words("Read // see https://example.com // later"));
    assert_eq!(task, "Read");
    assert_eq!(note, "see https://example.com // later");
}

#[test]
fn test_split_item_separator_at_end() {
    let (task, note) = split_item(&words("Call Anna //"));
    assert_eq!(task, "Call Anna");
    assert_eq!(note, "");
}

#[test]
fn test_split_item_slashes_inside_word_are_text() {
    let (task, note) = split_item(&words("Fix http://host/path"));
    assert_eq!(task, "Fix http://host/path");
    assert_eq!(note, "");
}

#[tokio::test]
async fn test_write_atomic_replaces_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join(".data");

    write_atomic(&path, b"first").await.unwrap();
    write_atomic(&path, b"second").await.unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");

    // No temp file is left behind
    let leftovers: Vec<_> = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(leftovers.len(), 1);
}

#[tokio::test]
async fn test_read_json_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let value: Option<Vec<OfflineItem>> = read_json(&dir.path().join(".offline")).await.unwrap();
    assert!(value.is_none());
}

#[tokio::test]
async fn test_read_json_malformed_file_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".offline");
    std::fs::write(&path, "not json").unwrap();

    let result: Result<Option<Vec<OfflineItem>>, Error> = read_json(&path).await;

    match result {
        Err(Error::Corrupt { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected corrupt state error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_remove_if_exists_ignores_missing() {
    let dir = tempfile::tempdir().unwrap();
    remove_if_exists(&dir.path().join("missing")).await.unwrap();
}

#[test]
fn test_login_response_with_numeric_expiry() {
    let body = r#"{"results":[{"auth":{"token":"abc123","expires":1700000000}}]}"#;
    let response: LoginResponse = serde_json::from_str(body).unwrap();
    let token = response.into_token().unwrap();
    assert_eq!(token.token, "abc123");
    assert_eq!(token.expiry, 1_700_000_000);
}

#[test]
fn test_login_response_with_string_expiry() {
    let body = r#"{"results":[{"auth":{"token":"abc123","expires":"1700000000"}}]}"#;
    let response: LoginResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.into_token().unwrap().expiry, 1_700_000_000);
}

#[test]
fn test_login_response_without_auth() {
    let body = r#"{"results":[{"error":{"code":1,"message":"invalid login"}}]}"#;
    let response: LoginResponse = serde_json::from_str(body).unwrap();
    assert!(response.into_token().is_none());

    let empty: LoginResponse = serde_json::from_str("{}").unwrap();
    assert!(empty.into_token().is_none());
}

#[test]
fn test_send_mail_request_shape() {
    let envelope = Envelope {
        from: "me@example.com".to_string(),
        to: "inbox@nirvanahq.in".to_string(),
        subject: "Buy milk".to_string(),
        body: " ".to_string(),
    };

    let json = serde_json::to_value(SendMailRequest::from(&envelope)).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "personalizations": [{"to": [{"email": "inbox@nirvanahq.in"}]}],
            "from": {"email": "me@example.com"},
            "subject": "Buy milk",
            "content": [{"type": "text/plain", "value": " "}]
        })
    );
}
