//! quizbot-providers — quiz sources and host integrations.
//!
//! Implements the `QuizSource` trait for the remote generation service and
//! the built-in quiz, and the `HostIntegration` trait for a configured
//! meeting host and a mock stand-in.

pub mod builtin;
pub mod config;
pub mod host;
pub mod http;

pub use config::{create_source, load_config_from, QuizbotConfig, SourceKind};
pub use host::create_host;
