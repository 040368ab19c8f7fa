use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,

    // shared secret compared against the "secret" field of every alert
    pub webhook_secret: String,

    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    pub telegram_api_base: String,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let host = env::var("HOST")
        .unwrap_or_else(|_| "0.0.0.0".to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8000);

    let webhook_secret = env::var("WEBHOOK_SECRET").unwrap_or_default();
    let telegram_bot_token = env::var("TELEGRAM_BOT_TOKEN").unwrap_or_default();
    let telegram_chat_id = env::var("TELEGRAM_CHAT_ID").unwrap_or_default();

    let telegram_api_base = env::var("TELEGRAM_API_BASE")
        .unwrap_or_else(|_| "https://api.telegram.org".to_string())
        .trim_end_matches('/')
        .to_string();

    Settings {
        host,
        port,
        webhook_secret,
        telegram_bot_token,
        telegram_chat_id,
        telegram_api_base,
    }
}

impl Settings {
    /// Names of the variables that are unset or empty. An empty secret
    /// leaves the webhook open to anyone.
    pub fn missing_vars(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.webhook_secret.is_empty() {
            missing.push("WEBHOOK_SECRET");
        }
        if self.telegram_bot_token.trim().is_empty() {
            missing.push("TELEGRAM_BOT_TOKEN");
        }
        if self.telegram_chat_id.trim().is_empty() {
            missing.push("TELEGRAM_CHAT_ID");
        }
        missing
    }
}
