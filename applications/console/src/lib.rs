//! TuneCloud Console Library
//!
//! Headless host for the playback controller: a simulated engine, a
//! line-command parser and a session that ties them together.
//!
//! This library exposes the core components for testing purposes.

pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod session;

// Re-export commonly used types for convenience
pub use commands::Command;
pub use config::ConsoleConfig;
pub use engine::SimulatedEngine;
pub use error::{ConsoleError, Result};
pub use session::Session;
