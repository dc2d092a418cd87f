//! Notification domain module

mod kind;

pub use kind::{KindId, NotificationKind, ALL_KINDS};
