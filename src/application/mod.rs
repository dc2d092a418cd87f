//! Application layer - Use cases and port interfaces
//!
//! Contains the notification abstraction, the core operations and the
//! trait definitions for external system interactions.

pub mod notification;
pub mod ports;
pub mod send;

pub use notification::{Notification, NotificationBuilder};
pub use send::{SendError, SendInput, SendNotificationUseCase, SendOutput};
