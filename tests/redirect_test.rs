mod common;

use std::time::Duration;

use common::{FakeWindow, REDIRECT_URI};
use musetunes::spotify::redirect::*;

#[test]
fn test_parse_grant() {
    let href = format!(
        "{}#access_token=ABC123&token_type=Bearer&expires_in=3600&state=daft%20punk",
        REDIRECT_URI
    );
    let grant = parse_grant(&href).expect("grant in fragment");

    assert_eq!(grant.access_token, "ABC123");
    assert_eq!(grant.expires_in, Duration::from_secs(3600));
}

#[test]
fn test_parse_grant_requires_token_and_expiry() {
    assert!(parse_grant(REDIRECT_URI).is_none());
    assert!(parse_grant(&format!("{}#access_token=ABC123", REDIRECT_URI)).is_none());
    assert!(parse_grant(&format!("{}#expires_in=3600", REDIRECT_URI)).is_none());
    assert!(parse_grant(&format!("{}#access_token=&expires_in=3600", REDIRECT_URI)).is_none());
    assert!(
        parse_grant(&format!("{}#access_token=ABC123&expires_in=soon", REDIRECT_URI)).is_none()
    );
}

#[test]
fn test_parse_grant_rejects_oversized_lifetime() {
    let href = format!(
        "{}#access_token=ABC123&expires_in=18446744073709551615",
        REDIRECT_URI
    );
    assert!(parse_grant(&href).is_none());

    let href = format!("{}#access_token=ABC123&expires_in=86401", REDIRECT_URI);
    assert!(parse_grant(&href).is_none());

    let href = format!("{}#access_token=ABC123&expires_in=86400", REDIRECT_URI);
    assert_eq!(
        parse_grant(&href).map(|g| g.expires_in),
        Some(Duration::from_secs(86400))
    );
}

#[test]
fn test_parse_grant_ignores_query_string() {
    // the implicit grant only ever answers in the fragment
    let href = format!("{}?access_token=ABC123&expires_in=3600", REDIRECT_URI);
    assert!(parse_grant(&href).is_none());
    assert!(!has_access_token(&href));
}

#[test]
fn test_has_access_token() {
    assert!(has_access_token(&format!(
        "{}#access_token=ABC123",
        REDIRECT_URI
    )));
    assert!(!has_access_token(&format!(
        "{}#error=access_denied",
        REDIRECT_URI
    )));
    assert!(!has_access_token(REDIRECT_URI));
}

#[test]
fn test_strip_fragment() {
    assert_eq!(
        strip_fragment(&format!("{}#access_token=ABC123&expires_in=3600", REDIRECT_URI)),
        REDIRECT_URI
    );
    assert_eq!(strip_fragment(REDIRECT_URI), REDIRECT_URI);
    assert_eq!(strip_fragment("not a url#secret"), "not a url");
}

#[test]
fn test_capture_grant_replaces_location() {
    let window = FakeWindow::at(&format!(
        "{}#access_token=ABC123&expires_in=3600",
        REDIRECT_URI
    ));

    let token = capture_grant(window.as_ref()).expect("token captured");

    assert_eq!(token.value(), "ABC123");
    assert_eq!(window.replaced(), vec![REDIRECT_URI.to_string()]);
    assert!(!window.location.lock().unwrap().contains("access_token"));
    assert!(window.navigations().is_empty());
}

#[test]
fn test_capture_grant_leaves_plain_location_alone() {
    let window = FakeWindow::at(REDIRECT_URI);

    assert!(capture_grant(window.as_ref()).is_none());
    assert!(window.replaced().is_empty());
}
