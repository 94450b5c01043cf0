//! # slashroute-proto
//!
//! Data model for chat-platform interaction events: slash commands,
//! autocomplete requests and UI component activations.
//!
//! The types here are plain values. They are produced by a transport layer
//! (gateway or webhook) and consumed, read-only, by a router.
//!
//! ## Features
//!
//! - Interaction, option and component type tags with their platform codes
//! - Recursively nested command options for subcommands and subcommand groups
//! - Convenience constructors for building interactions in tests and tools
//! - Optional `serde` support behind the `serde` feature
//!
//! ## Quick Start
//!
//! ```rust
//! use slashroute_proto::{CommandOption, Interaction};
//!
//! let ev = Interaction::command("role", vec![
//!     CommandOption::group("admin", vec![
//!         CommandOption::subcommand("add", vec![CommandOption::role("role", 42)]),
//!     ]),
//! ]);
//!
//! let data = ev.command_data().expect("command payload");
//! assert_eq!(data.options[0].options[0].name, "add");
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod interaction;
pub mod kind;
pub mod option;

pub use self::error::{ProtoError, Result};
pub use self::interaction::{CommandData, ComponentData, Interaction, InteractionData};
pub use self::kind::{ComponentKind, InteractionKind, OptionKind};
pub use self::option::{CommandOption, OptionValue};
