//! Process configuration.
//!
//! Configuration is read from environment variables (a `.env` file is honoured) and
//! resolved against the network registry, so an unknown network name never reaches
//! the rest of the process.

#![allow(clippy::result_large_err)]

mod configuration;
mod error;

pub use configuration::{Configuration, Mode};
pub use error::ConfigError;
