//! Turns an inbound alert into the HTML-formatted Telegram message.
//!
//! Every value taken from the payload goes through [`escape_html`] before it
//! is placed next to markup, so a sender cannot inject tags of its own.

use chrono::{DateTime, Datelike};
use serde_json::Value;

use crate::models::{AlertField, InboundAlert, PLACEHOLDER, alert::value_to_string};

const HEADER: &str = "🟢 <b>TRADING ALERT</b>";

// Largest instant a JS-style date can hold: 8.64e15 ms either side of the epoch.
const MAX_EPOCH_MS: f64 = 8.64e15;

// Up to this magnitude a numeric time is read as seconds.
const SECONDS_CUTOFF: f64 = 1e12;

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders a numeric epoch as `YYYY-MM-DD HH:MM:SS.mmm UTC`.
///
/// Values up to 1e12 in magnitude are seconds, larger ones milliseconds.
/// Returns `None` past ±8.64e15 ms or past the calendar range chrono can
/// hold (about year ±262000).
pub fn format_epoch(t: f64) -> Option<String> {
    if !t.is_finite() {
        return None;
    }

    let ms = if t.abs() <= SECONDS_CUTOFF { t * 1000.0 } else { t };
    let ms = ms.trunc();
    if ms.abs() > MAX_EPOCH_MS {
        return None;
    }

    let dt = DateTime::from_timestamp_millis(ms as i64)?;
    Some(format!(
        "{}-{} UTC",
        format_year(dt.year()),
        dt.format("%m-%d %H:%M:%S%.3f")
    ))
}

// Four digits inside 0..=9999, otherwise a sign and six digits (+010000, -000001).
fn format_year(year: i32) -> String {
    if (0..=9999).contains(&year) {
        format!("{year:04}")
    } else if year > 0 {
        format!("+{year:06}")
    } else {
        format!("-{:06}", -year)
    }
}

fn format_time(v: Option<&Value>) -> Option<String> {
    match v? {
        Value::Number(n) => format_epoch(n.as_f64()?),
        Value::String(s) => Some(escape_html(s)),
        _ => None,
    }
}

/// Escaped view of an alert. `None` stands for the placeholder; a value that
/// escapes to the placeholder text itself is treated the same way, except for
/// `side`, where `None` means absent and renders as `?`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedAlert {
    pub symbol: Option<String>,
    pub side: Option<String>,
    pub price: Option<String>,
    pub time: Option<String>,
    pub sl: Option<String>,
    pub tp1: Option<String>,
    pub tp2: Option<String>,
    pub rr: Option<String>,
    pub session: Option<String>,
    pub fib: Option<String>,
    pub bos: Option<String>,
    pub fvg: Option<String>,
    pub ob: Option<String>,
    pub notes: Option<String>,
}

fn present(s: String) -> Option<String> {
    if s == PLACEHOLDER { None } else { Some(s) }
}

impl NormalizedAlert {
    pub fn from_alert(alert: &InboundAlert) -> Self {
        let esc = |field: AlertField| {
            alert
                .get(field)
                .map(|v| escape_html(&value_to_string(v)))
                .and_then(present)
        };

        Self {
            symbol: esc(AlertField::Symbol),
            // a literal "-" side is shown as sent; only absence becomes "?"
            side: alert
                .get(AlertField::Side)
                .map(|v| escape_html(&value_to_string(v))),
            price: esc(AlertField::Price),
            time: format_time(alert.get(AlertField::Time)).and_then(present),
            sl: esc(AlertField::StopLoss),
            tp1: esc(AlertField::TakeProfit1),
            tp2: esc(AlertField::TakeProfit2),
            rr: esc(AlertField::RiskReward),
            session: esc(AlertField::Session),
            fib: esc(AlertField::FibTrigger),
            bos: esc(AlertField::BreakOfStructure),
            fvg: esc(AlertField::FairValueGap),
            ob: esc(AlertField::OrderBlock),
            notes: esc(AlertField::Notes),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        fn or_dash(v: &Option<String>) -> &str {
            v.as_deref().unwrap_or(PLACEHOLDER)
        }

        let mut lines = vec![
            HEADER.to_string(),
            format!("• <b>Symbol</b>: {}", or_dash(&self.symbol)),
            format!(
                "• <b>Side</b>: {}  @ <b>{}</b>",
                self.side.as_deref().unwrap_or("?"),
                or_dash(&self.price)
            ),
            format!("• <b>Time</b>: {}", or_dash(&self.time)),
        ];

        if self.sl.is_some() || self.tp1.is_some() || self.tp2.is_some() {
            lines.push(format!(
                "• <b>SL</b>: {}  |  <b>TP1</b>: {}  |  <b>TP2</b>: {}",
                or_dash(&self.sl),
                or_dash(&self.tp1),
                or_dash(&self.tp2)
            ));
        }

        let extras: Vec<String> = [
            ("RR", &self.rr),
            ("Session", &self.session),
            ("Fibo", &self.fib),
            ("BOS", &self.bos),
            ("FVG", &self.fvg),
            ("OB", &self.ob),
        ]
        .into_iter()
        .filter_map(|(label, v)| v.as_ref().map(|v| format!("{label} {v}")))
        .collect();

        if !extras.is_empty() {
            lines.push(format!("• {}", extras.join(" · ")));
        }

        if let Some(notes) = &self.notes {
            lines.push(format!("• <b>Notes</b>: {notes}"));
        }

        lines
    }
}

/// Full message text, one line per entry.
pub fn format_signal(alert: &InboundAlert) -> String {
    NormalizedAlert::from_alert(alert).lines().join("\n")
}
