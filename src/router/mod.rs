//! Interaction routing.
//!
//! This module contains the route table and the infrastructure around it:
//!
//! - [`path`]: the paired algorithms that compute a route key from a
//!   definition tree (registration) and from a live interaction (dispatch)
//! - [`context`]: the per-dispatch [`OptionMap`] handed to handlers
//! - [`traits`]: handler traits, implemented for closures
//! - [`component`]: key extraction strategies for component interactions
//! - [`registry`]: the [`Router`] itself

pub mod component;
pub mod context;
pub mod path;
pub mod registry;
pub mod traits;

pub use component::{ComponentKey, ComponentKeyFn};
pub use context::{OptionMap, Resolved};
pub use registry::Router;
pub use traits::{CommandHandler, ComponentHandler};
