//! NotifyBridge - notification kinds rendered across platforms
//!
//! A showcase of the Bridge pattern: a [`application::Notification`] decides
//! *what* to show (text, image or video) and delegates *how* it looks to a
//! shared [`application::ports::PlatformRenderer`] (web, mobile or desktop).
//! Three kinds and three platforms take six types instead of nine.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (platforms, kinds, config) and errors
//! - **Application**: The notification abstraction, use cases and port interfaces
//! - **Infrastructure**: Adapter implementations (renderers, sinks, config file)
//! - **CLI**: Command-line interface, showcase harness and logging setup

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
