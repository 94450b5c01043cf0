//! # slashroute
//!
//! Command dispatch for chat-platform bots. Slash commands, subcommands,
//! subcommand groups, autocomplete requests and UI component activations are
//! routed to handlers registered under a colon-joined path.
//!
//! ```
//! use slashroute::{CommandDef, Router};
//! use slashroute_proto::{CommandOption, Interaction};
//!
//! let router: Router = Router::new();
//! router
//!     .register_all(&[CommandDef::command("user").child(
//!         CommandDef::subcommand("ban").execute(|_, opts| {
//!             Ok(format!("banned: {}", opts.str("reason").unwrap_or("no reason")))
//!         }),
//!     )])
//!     .unwrap();
//!
//! let ev = Interaction::command("user", vec![CommandOption::subcommand(
//!     "ban",
//!     vec![CommandOption::string("reason", "spam")],
//! )]);
//! assert_eq!(router.find_and_execute(&ev).unwrap(), "banned: spam");
//! ```

pub mod config;
pub mod definition;
pub mod error;
pub mod router;
pub mod telemetry;

pub use definition::{CommandDef, Component, Handlers, NodeKind};
pub use error::{DefinitionFault, HandlerError, HandlerResult, RouterError, RouterResult};
pub use router::{
    CommandHandler, ComponentHandler, ComponentKey, OptionMap, Router,
};
