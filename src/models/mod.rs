pub mod alert;
pub mod notification;

pub use alert::{AlertField, InboundAlert, PLACEHOLDER};
pub use notification::OutboundNotification;
