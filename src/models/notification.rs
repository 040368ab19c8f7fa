use serde::Serialize;

/// Body of a Bot API `sendMessage` call.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundNotification {
    pub chat_id: String,
    pub text: String,

    // "HTML": text carries <b> tags and escaped values
    pub parse_mode: &'static str,
    pub disable_web_page_preview: bool,
}

impl OutboundNotification {
    pub fn html(chat_id: &str, text: String) -> Self {
        Self {
            chat_id: chat_id.to_string(),
            text,
            parse_mode: "HTML",
            disable_web_page_preview: true,
        }
    }
}
