// Error type unit tests

use urlsmith::{Error, UrlBuilder};

#[test]
fn test_invalid_domain_message_names_domain() {
    let err = UrlBuilder::new("https://bad").unwrap_err();
    assert!(err.to_string().contains("https://bad"));
    assert_eq!(err.kind(), "invalid_domain");
}

#[test]
fn test_io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: Error = io.into();
    assert_eq!(err.kind(), "io");
    assert!(err.to_string().starts_with("I/O error"));
}

#[test]
fn test_errors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + std::error::Error>() {}
    assert_send_sync::<Error>();
}
