// Signing unit tests

use rstest::rstest;
use urlsmith::signing::{sign_url, signature_base};

#[rstest]
#[case("s", "/x", "", "1734e0419395e6a6122336d974eec196")]
#[case("s", "/x", "a=1", "3a06a951a4a1e9b1a3bdd229a59bb4d4")]
#[case("", "/x", "", "cc8755609ad61864910f145119713de9")]
#[case(
    "FOO123bar",
    "/users/1.png",
    "h=200&w=100",
    "725236c9f25ab8fc414d5ed1c0030688"
)]
fn test_known_signatures(
    #[case] secret: &str,
    #[case] path: &str,
    #[case] query: &str,
    #[case] expected: &str,
) {
    assert_eq!(sign_url(secret, path, query), expected);
}

#[test]
fn test_delimiter_only_with_query() {
    assert_eq!(signature_base("s", "/x", ""), "s/x");
    assert_eq!(signature_base("s", "/x", "a=1"), "s/x?a=1");
    assert_eq!(signature_base("s", "/x", "a=1").matches('?').count(), 1);
}

#[test]
fn test_query_presence_changes_signature() {
    assert_ne!(sign_url("s", "/x", ""), sign_url("s", "/x?", ""));
    assert_ne!(sign_url("s", "/x", ""), sign_url("s", "/x", "a=1"));
}

#[test]
fn test_signature_is_pure() {
    let first = sign_url("secret", "/a.png", "w=1");
    for _ in 0..10 {
        assert_eq!(sign_url("secret", "/a.png", "w=1"), first);
    }
}

#[test]
fn test_each_input_changes_signature() {
    let base = sign_url("secret", "/a.png", "w=1");
    assert_ne!(base, sign_url("secreT", "/a.png", "w=1"));
    assert_ne!(base, sign_url("secret", "/b.png", "w=1"));
    assert_ne!(base, sign_url("secret", "/a.png", "w=2"));
}

#[test]
fn test_signature_format() {
    let sig = sign_url("k", "/", "");
    assert_eq!(sig.len(), 32);
    assert_eq!(sig, sig.to_lowercase());
    assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
}
