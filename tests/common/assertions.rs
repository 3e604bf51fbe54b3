//! Custom assertion macros
//!
//! Checks on the `{message, status, ...}` envelope returned by every
//! endpoint.

/// Assert the HTTP status, that the body echoes it, and return the body
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {{
        let response = $response;
        assert_eq!(
            response.status, $status,
            "unexpected status, body: {}",
            response.body
        );
        assert_eq!(
            response.body["status"].as_u64(),
            Some($status.as_u16() as u64),
            "envelope status mismatch, body: {}",
            response.body
        );
        response.body
    }};
}

/// Assert status and envelope message, return the body
#[macro_export]
macro_rules! assert_envelope {
    ($response:expr, $status:expr, $message:expr) => {{
        let body = assert_status!($response, $status);
        assert_eq!(body["message"], $message, "body: {}", body);
        body
    }};
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
