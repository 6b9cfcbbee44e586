//! Shared HTTP response helpers for the random.org client.
//!
//! Centralizes the status-code check and body parsing so the client stays
//! focused on request construction.

use crate::error::RandomError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Any other status becomes
/// [`RandomError::Transport`] carrying the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, RandomError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(RandomError::Transport(format!(
            "HTTP {}: {}",
            status.as_u16(),
            body.trim()
        )));
    }
    Ok(resp)
}

/// Parse a plain-text body holding one decimal fraction.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// [`RandomError::Format`] if the body is not a finite number in `[0, 1)`.
pub fn parse_fraction(body: &str) -> Result<f64, RandomError> {
    let trimmed = body.trim();
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| RandomError::Format(trimmed.to_string()))?;
    if !value.is_finite() || !(0.0..1.0).contains(&value) {
        return Err(RandomError::Format(trimmed.to_string()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[test]
    fn parses_plain_fraction_with_newline() {
        assert!((parse_fraction("0.47\n").unwrap() - 0.47).abs() < f64::EPSILON);
        assert!(parse_fraction("0").unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_non_numeric_body() {
        let err = parse_fraction("invalid_response").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid response from random.org: invalid_response"
        );
    }

    #[test]
    fn rejects_out_of_range_and_non_finite() {
        for body in ["1", "1.0", "42", "-0.1", "NaN", "inf"] {
            assert!(
                matches!(parse_fraction(body), Err(RandomError::Format(_))),
                "{body} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "0.5");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_server_error() {
        let resp = mock_response(503, "Service Unavailable");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, RandomError::Transport(ref m) if m == "HTTP 503: Service Unavailable"));
    }
}
