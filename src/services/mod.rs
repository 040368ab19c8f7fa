pub mod signal_format;
pub mod telegram;
