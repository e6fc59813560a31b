//! Logging setup.
//!
//! Everything in the crate logs through the `log` facade; shader and program
//! build diagnostics go out at `error` level. This module installs the
//! `env_logger` backend.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
