//! Command definitions.
//!
//! A [`CommandDef`] tree is declared once at startup and handed to
//! [`Router::register_all`](crate::Router::register_all), which flattens it
//! into colon-joined routes. Nesting follows the platform: a root command may
//! hold subcommands and subcommand groups, and a group holds subcommands.
//!
//! ```
//! use slashroute::CommandDef;
//!
//! let role: CommandDef = CommandDef::command("role").child(
//!     CommandDef::group("admin").child(
//!         CommandDef::subcommand("add").execute(|_, opts| {
//!             Ok(format!("added {:?}", opts.snowflake("role")))
//!         }),
//!     ),
//! );
//! assert_eq!(role.children[0].children[0].segment, "add");
//! ```

use std::fmt;
use std::sync::Arc;

use slashroute_proto::Interaction;

use crate::error::HandlerResult;
use crate::router::{CommandHandler, ComponentHandler, OptionMap};

/// Position of a node in the command tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A root command, or below a root a plain (non-routing) option node.
    Command,
    Subcommand,
    SubcommandGroup,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Command => "command",
            Self::Subcommand => "subcommand",
            Self::SubcommandGroup => "subcommand group",
        })
    }
}

/// Handler slots of one node.
pub struct Handlers<T = String> {
    pub execute: Option<Arc<dyn CommandHandler<T>>>,
    pub autocomplete: Option<Arc<dyn CommandHandler<T>>>,
}

impl<T> Handlers<T> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.execute.is_none() && self.autocomplete.is_none()
    }
}

impl<T> Default for Handlers<T> {
    fn default() -> Self {
        Self {
            execute: None,
            autocomplete: None,
        }
    }
}

impl<T> Clone for Handlers<T> {
    fn clone(&self) -> Self {
        Self {
            execute: self.execute.clone(),
            autocomplete: self.autocomplete.clone(),
        }
    }
}

impl<T> fmt::Debug for Handlers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("execute", &self.execute.is_some())
            .field("autocomplete", &self.autocomplete.is_some())
            .finish()
    }
}

/// One node of a command tree.
pub struct CommandDef<T = String> {
    /// Path segment, unique among siblings.
    pub segment: String,
    pub kind: NodeKind,
    pub handlers: Handlers<T>,
    pub children: Vec<CommandDef<T>>,
}

impl<T> CommandDef<T> {
    fn new(segment: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            segment: segment.into(),
            kind,
            handlers: Handlers::default(),
            children: Vec::new(),
        }
    }

    /// A root command.
    pub fn command(segment: impl Into<String>) -> Self {
        Self::new(segment, NodeKind::Command)
    }

    pub fn subcommand(segment: impl Into<String>) -> Self {
        Self::new(segment, NodeKind::Subcommand)
    }

    pub fn group(segment: impl Into<String>) -> Self {
        Self::new(segment, NodeKind::SubcommandGroup)
    }

    /// Set the primary handler from a closure.
    #[must_use]
    pub fn execute<F>(mut self, f: F) -> Self
    where
        F: Fn(&Interaction, &OptionMap<'_>) -> HandlerResult<T> + Send + Sync + 'static,
    {
        self.handlers.execute = Some(Arc::new(f));
        self
    }

    /// Set the autocomplete handler from a closure.
    #[must_use]
    pub fn autocomplete<F>(mut self, f: F) -> Self
    where
        F: Fn(&Interaction, &OptionMap<'_>) -> HandlerResult<T> + Send + Sync + 'static,
    {
        self.handlers.autocomplete = Some(Arc::new(f));
        self
    }

    /// Set the primary handler from a shared handler value.
    #[must_use]
    pub fn execute_with(mut self, handler: Arc<dyn CommandHandler<T>>) -> Self {
        self.handlers.execute = Some(handler);
        self
    }

    #[must_use]
    pub fn autocomplete_with(mut self, handler: Arc<dyn CommandHandler<T>>) -> Self {
        self.handlers.autocomplete = Some(handler);
        self
    }

    #[must_use]
    pub fn child(mut self, child: CommandDef<T>) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = CommandDef<T>>) -> Self {
        self.children.extend(children);
        self
    }
}

impl<T> fmt::Debug for CommandDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDef")
            .field("segment", &self.segment)
            .field("kind", &self.kind)
            .field("handlers", &self.handlers)
            .field("children", &self.children)
            .finish()
    }
}

/// A UI component binding, keyed independently of the command tree.
pub struct Component<T = String> {
    pub key: String,
    pub handler: Arc<dyn ComponentHandler<T>>,
}

impl<T> Component<T> {
    pub fn new<F>(key: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Interaction) -> HandlerResult<T> + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            handler: Arc::new(f),
        }
    }

    pub fn with_handler(key: impl Into<String>, handler: Arc<dyn ComponentHandler<T>>) -> Self {
        Self {
            key: key.into(),
            handler,
        }
    }
}

impl<T> fmt::Debug for Component<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component").field("key", &self.key).finish()
    }
}
