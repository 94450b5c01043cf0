//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: the top-level [`Config`] struct and file loading
//! - [`router`]: routing behavior (RouterConfig, ComponentKeyMode)
//! - [`log`]: log filter and output format (LogConfig, LogFormat)
//! - [`validation`]: startup checks

mod log;
mod router;
mod types;
mod validation;

pub use log::{LogConfig, LogFormat};
pub use router::{ComponentKeyMode, RouterConfig};
pub use types::{Config, ConfigError};
pub use validation::{ValidationError, validate};
