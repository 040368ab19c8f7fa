//! Library entrypoint for signal-relay.
//!
//! Receives trading-signal webhooks, renders them as HTML messages and relays
//! them to a Telegram chat. Integration tests under `tests/` build the router
//! from here.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub mod controllers;
pub mod routes;

use services::telegram::TelegramClient;

#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub telegram: TelegramClient,
}

impl AppState {
    pub fn new(settings: config::Settings) -> Self {
        let telegram = TelegramClient::new(
            settings.telegram_api_base.clone(),
            settings.telegram_bot_token.clone(),
            settings.telegram_chat_id.clone(),
        );

        Self { settings, telegram }
    }
}
