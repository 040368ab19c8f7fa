use serde_json::{Map, Value};

/// Rendered in place of any field the alert does not carry.
pub const PLACEHOLDER: &str = "-";

/// Logical fields of a trading alert. Senders name them in several ways, so
/// each one resolves through an ordered list of accepted keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertField {
    Symbol,
    Side,
    Price,
    StopLoss,
    TakeProfit1,
    TakeProfit2,
    RiskReward,
    Session,
    FibTrigger,
    BreakOfStructure,
    FairValueGap,
    OrderBlock,
    Notes,
    Time,
}

impl AlertField {
    /// Accepted keys, highest priority first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            AlertField::Symbol => &["symbol", "ticker", "pair"],
            AlertField::Side => &["side", "direction"],
            AlertField::Price => &["price", "entry", "close"],
            AlertField::StopLoss => &["sl", "stop", "stop_loss"],
            AlertField::TakeProfit1 => &["tp1", "tp_1"],
            AlertField::TakeProfit2 => &["tp2", "tp_2"],
            AlertField::RiskReward => &["rr", "risk_reward"],
            AlertField::Session => &["session", "sess"],
            AlertField::FibTrigger => &["fib_trigger", "fib"],
            AlertField::BreakOfStructure => &["bos", "break_of_structure"],
            AlertField::FairValueGap => &["fvg"],
            AlertField::OrderBlock => &["ob", "order_block"],
            AlertField::Notes => &["reason", "notes", "setup"],
            AlertField::Time => &["time", "timestamp"],
        }
    }
}

/// Inbound webhook body. Every field is optional; the payload is kept as a
/// JSON object and read through [`InboundAlert::get`].
#[derive(Debug, Clone, Default)]
pub struct InboundAlert {
    fields: Map<String, Value>,
}

impl InboundAlert {
    /// Parses a request body. Only JSON objects are accepted.
    pub fn from_slice(body: &[u8]) -> Option<Self> {
        match serde_json::from_slice::<Value>(body).ok()? {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// First alias carrying a non-null value.
    pub fn get(&self, field: AlertField) -> Option<&Value> {
        field
            .aliases()
            .iter()
            .filter_map(|key| self.fields.get(*key))
            .find(|v| !v.is_null())
    }

    /// The shared secret as sent. Falsy values (`null`, `false`, `0`, `""`)
    /// count as no secret at all.
    pub fn secret(&self) -> String {
        match self.fields.get("secret") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
            Some(v) => value_to_string(v),
        }
    }
}

impl From<Map<String, Value>> for InboundAlert {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Plain-text form of a JSON value as it appears in a message.
pub fn value_to_string(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                return n.to_string();
            }
            match n.as_f64() {
                // shortest round-trip digits, zero-padded: 65000.0 -> "65000"
                Some(f) if f == 0.0 => "0".to_string(),
                Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => f.to_string(),
                _ => n.to_string(),
            }
        }
        Value::Array(_) | Value::Object(_) => v.to_string(),
    }
}
