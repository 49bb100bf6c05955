// Assertions for dashboard responses

use crate::TestResponse;

pub fn assert_status(response: &TestResponse, expected: u16) {
    let actual = response.status();
    assert_eq!(
        actual,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        actual,
        response.body_string()
    );
}

/// Assert a 302 pointing at `location`
pub fn assert_redirect(response: &TestResponse, location: &str) {
    assert_status(response, 302);
    assert_eq!(
        response.location(),
        Some(location),
        "Expected redirect to '{}'",
        location
    );
}

pub fn assert_body_contains(response: &TestResponse, expected: &str) {
    let body = response.body_string();
    assert!(
        body.contains(expected),
        "Expected body to contain '{}', but it didn't. Body: {}",
        expected,
        body
    );
}

pub fn assert_body_lacks(response: &TestResponse, unexpected: &str) {
    let body = response.body_string();
    assert!(
        !body.contains(unexpected),
        "Expected body not to contain '{}'. Body: {}",
        unexpected,
        body
    );
}

pub fn assert_html_content_type(response: &TestResponse) {
    let content_type = response.header("Content-Type");
    assert!(
        content_type
            .map(|ct| ct.contains("text/html"))
            .unwrap_or(false),
        "Expected HTML content type, got {:?}",
        content_type
    );
}
