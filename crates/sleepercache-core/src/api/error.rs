use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP {status} from {url}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Network error fetching {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Response from {url} is not valid JSON: {source}")]
    InvalidBody {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected {resource} shape from {url}: {source}")]
    Decode {
        url: String,
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl FetchError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut cut = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}... (truncated, {} total bytes)", &body[..cut], body.len())
    }

    pub fn from_status(url: &str, status: reqwest::StatusCode, body: &str) -> Self {
        FetchError::Status {
            url: url.to_string(),
            status,
            body: Self::truncate_body(body),
        }
    }

    /// The URL of the failing request, if the error came from one.
    pub fn url(&self) -> Option<&str> {
        match self {
            FetchError::Status { url, .. }
            | FetchError::Transport { url, .. }
            | FetchError::InvalidBody { url, .. }
            | FetchError::Decode { url, .. } => Some(url),
            FetchError::Client(_) => None,
        }
    }

    /// The HTTP status, when the server answered with a non-success code.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Transport { source, .. } => source.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(reqwest::StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_keeps_url_and_status() {
        let err = FetchError::from_status(
            "https://api.sleeper.app/v1/league/1/rosters",
            reqwest::StatusCode::BAD_GATEWAY,
            "upstream down",
        );
        assert_eq!(err.url(), Some("https://api.sleeper.app/v1/league/1/rosters"));
        assert_eq!(err.status(), Some(reqwest::StatusCode::BAD_GATEWAY));
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("upstream down"));
    }

    #[test]
    fn test_long_body_is_truncated() {
        let body = "x".repeat(2000);
        let err = FetchError::from_status("u", reqwest::StatusCode::INTERNAL_SERVER_ERROR, &body);
        match err {
            FetchError::Status { body, .. } => {
                assert!(body.starts_with(&"x".repeat(MAX_ERROR_BODY_LENGTH)));
                assert!(body.ends_with("(truncated, 2000 total bytes)"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        // 'é' is two bytes, so byte 500 falls mid-character
        let body = format!("a{}", "é".repeat(400));
        let truncated = FetchError::truncate_body(&body);
        assert!(truncated.contains("truncated"));
    }

    #[test]
    fn test_decode_error_keeps_url() {
        let source = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err = FetchError::Decode {
            url: "https://api.sleeper.app/v1/league/1".to_string(),
            resource: "league",
            source,
        };
        assert_eq!(err.url(), Some("https://api.sleeper.app/v1/league/1"));
        assert_eq!(err.status(), None);
        assert!(err
            .to_string()
            .starts_with("Unexpected league shape from https://api.sleeper.app/v1/league/1"));
    }
}
