use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::services::telegram::TelegramError;

/// Terminal failures of a webhook request. Each one maps to a fixed status
/// and a plaintext body.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("Expecting JSON")]
    UnsupportedMediaType,

    #[error("Bad JSON")]
    MalformedPayload,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Telegram error: {0}")]
    UpstreamDeliveryError(String),
}

impl WebhookError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebhookError::UnsupportedMediaType | WebhookError::MalformedPayload => {
                StatusCode::BAD_REQUEST
            }
            WebhookError::Unauthorized => StatusCode::UNAUTHORIZED,
            WebhookError::UpstreamDeliveryError(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<TelegramError> for WebhookError {
    fn from(e: TelegramError) -> Self {
        match e {
            TelegramError::Status { body, .. } => WebhookError::UpstreamDeliveryError(body),
            TelegramError::Transport(e) => WebhookError::UpstreamDeliveryError(e.to_string()),
        }
    }
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_and_bodies_are_fixed() {
        let cases = [
            (WebhookError::UnsupportedMediaType, 400, "Expecting JSON"),
            (WebhookError::MalformedPayload, 400, "Bad JSON"),
            (WebhookError::Unauthorized, 401, "Unauthorized"),
        ];
        for (err, status, body) in cases {
            assert_eq!(err.status().as_u16(), status);
            assert_eq!(err.to_string(), body);
        }
    }

    #[test]
    fn upstream_status_keeps_upstream_body() {
        let err: WebhookError = TelegramError::Status {
            status: reqwest::StatusCode::BAD_REQUEST,
            body: r#"{"ok":false,"description":"chat not found"}"#.to_string(),
        }
        .into();

        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            err.to_string(),
            r#"Telegram error: {"ok":false,"description":"chat not found"}"#
        );
    }
}
