//! Handler traits.
//!
//! A handler is anything that can be invoked with an interaction. Closures
//! get a blanket implementation, so most callers never implement these
//! traits by hand; stateful handlers (holding a database pool, an HTTP
//! client) implement them on their own struct.
//!
//! Handlers are shared between threads and may be invoked concurrently for
//! the same route, hence the `Send + Sync` bound.

use slashroute_proto::Interaction;

use super::context::OptionMap;
use crate::error::HandlerResult;

/// Handler for slash commands and autocomplete requests.
pub trait CommandHandler<T = String>: Send + Sync {
    /// Handle one interaction with the options of its resolved leaf level.
    fn handle(&self, interaction: &Interaction, options: &OptionMap<'_>) -> HandlerResult<T>;
}

impl<T, F> CommandHandler<T> for F
where
    F: Fn(&Interaction, &OptionMap<'_>) -> HandlerResult<T> + Send + Sync,
{
    #[inline]
    fn handle(&self, interaction: &Interaction, options: &OptionMap<'_>) -> HandlerResult<T> {
        self(interaction, options)
    }
}

/// Handler for UI component activations.
pub trait ComponentHandler<T = String>: Send + Sync {
    fn handle(&self, interaction: &Interaction) -> HandlerResult<T>;
}

impl<T, F> ComponentHandler<T> for F
where
    F: Fn(&Interaction) -> HandlerResult<T> + Send + Sync,
{
    #[inline]
    fn handle(&self, interaction: &Interaction) -> HandlerResult<T> {
        self(interaction)
    }
}
