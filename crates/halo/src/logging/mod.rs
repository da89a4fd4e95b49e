//! Logging utilities.
//!
//! The crate logs through the `log` facade only; this module centralizes the
//! `env_logger` backend initialization for hosts that do not bring their own.

mod init;

pub use init::{LoggingConfig, init_logging};
