//! Conversions from infrastructure errors into domain errors.

use cowork_domain::CoworkError;

use super::ApiError;

impl From<ApiError> for CoworkError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::Vendor { message } => CoworkError::Api(message),
            ApiError::Status { status, url, body } => {
                if body.is_empty() {
                    CoworkError::Api(format!("{url} returned status {status}"))
                } else {
                    CoworkError::Api(format!("{url} returned status {status}: {body}"))
                }
            }
            ApiError::Transport(err) => {
                if err.is_timeout() {
                    CoworkError::Transport("HTTP request timed out".into())
                } else if err.is_connect() {
                    CoworkError::Transport(format!("HTTP connection failed: {err}"))
                } else {
                    CoworkError::Transport(err.to_string())
                }
            }
            ApiError::Decode { url, reason } => {
                CoworkError::Internal(format!("failed to decode response from {url}: {reason}"))
            }
            ApiError::Config(message) => CoworkError::Config(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;

    #[test]
    fn vendor_error_becomes_api_error() {
        let err: CoworkError = ApiError::Vendor { message: "Quota exceeded".into() }.into();
        assert_eq!(err, CoworkError::Api("Quota exceeded".into()));
    }

    #[test]
    fn status_error_keeps_body() {
        let err: CoworkError = ApiError::Status {
            status: StatusCode::BAD_GATEWAY,
            url: "https://x.test".into(),
            body: "upstream down".into(),
        }
        .into();

        assert_eq!(
            err,
            CoworkError::Api("https://x.test returned status 502 Bad Gateway: upstream down".into())
        );
    }

    #[test]
    fn decode_error_is_internal() {
        let err: CoworkError =
            ApiError::Decode { url: "https://x.test".into(), reason: "eof".into() }.into();
        assert!(matches!(err, CoworkError::Internal(_)));
    }

    #[test]
    fn config_error_is_preserved() {
        let err: CoworkError = ApiError::Config("bad header".into()).into();
        assert_eq!(err, CoworkError::Config("bad header".into()));
    }
}
