use reqwest::{Client, StatusCode};

use crate::models::OutboundNotification;

#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    #[error("Telegram API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Telegram API unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    api_base: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramClient {
    pub fn new(api_base: String, bot_token: String, chat_id: String) -> Self {
        Self {
            http: Client::new(),
            api_base,
            bot_token,
            chat_id,
        }
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.bot_token)
    }

    /// Posts `text` to the configured chat as an HTML message with link
    /// previews turned off. One attempt, no timeout beyond the client default.
    pub async fn send_message(&self, text: String) -> Result<(), TelegramError> {
        let payload = OutboundNotification::html(&self.chat_id, text);

        let res = self
            .http
            .post(self.send_message_url())
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(TelegramError::Status { status, body });
        }

        Ok(())
    }
}
