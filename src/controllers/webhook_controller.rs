use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{
    error::WebhookError,
    models::{AlertField, InboundAlert, alert::value_to_string},
    services::{signal_format, telegram::TelegramError},
    AppState,
};

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

fn field_for_log(alert: &InboundAlert, field: AlertField) -> String {
    alert.get(field).map(value_to_string).unwrap_or_default()
}

// Upstream bodies can be long; keep log lines short.
fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

// POST /webhook
pub async fn post_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match forward_alert(&state, &headers, &body).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "ok": true }))).into_response(),
        Err(e) => {
            if !matches!(e, WebhookError::UpstreamDeliveryError(_)) {
                tracing::warn!("webhook rejected: {}", e);
            }
            e.into_response()
        }
    }
}

async fn forward_alert(
    state: &AppState,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<(), WebhookError> {
    if !is_json(headers) {
        return Err(WebhookError::UnsupportedMediaType);
    }

    let alert = InboundAlert::from_slice(body).ok_or(WebhookError::MalformedPayload)?;

    if alert.secret() != state.settings.webhook_secret {
        return Err(WebhookError::Unauthorized);
    }

    let text = signal_format::format_signal(&alert);

    if let Err(e) = state.telegram.send_message(text).await {
        match &e {
            TelegramError::Status { status, body } => {
                tracing::error!(
                    "Telegram API error: {} - response={}",
                    status,
                    truncate(body, 300)
                );
            }
            TelegramError::Transport(err) => {
                tracing::error!("Telegram API unreachable: {}", err);
            }
        }
        return Err(e.into());
    }

    tracing::info!(
        symbol = %field_for_log(&alert, AlertField::Symbol),
        side = %field_for_log(&alert, AlertField::Side),
        "alert forwarded"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn content_type_is_substring_match() {
        let mut h = HeaderMap::new();
        assert!(!is_json(&h));

        h.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        assert!(!is_json(&h));

        h.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        assert!(is_json(&h));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("hi", 300), "hi");
    }
}
