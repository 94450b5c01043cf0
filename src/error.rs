//! Unified error handling for slashroute.
//!
//! Registration and dispatch share one error type so callers can match on
//! the failure kind and pull a static label for logging.

use slashroute_proto::InteractionKind;
use thiserror::Error;

use crate::definition::NodeKind;

/// Error returned by a handler. The router never inspects it.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Result type returned by command and component handlers.
pub type HandlerResult<T = String> = Result<T, HandlerError>;

// ============================================================================
// Definition faults (registration)
// ============================================================================

/// Why a command definition was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DefinitionFault {
    #[error("no execute handler")]
    MissingHandler,

    #[error("subcommand group has no subcommands")]
    EmptyGroup,

    #[error("unexpected {0} child")]
    UnexpectedChild(NodeKind),

    #[error("subcommand group cannot carry handlers")]
    HandlerOnGroup,

    #[error("command with subcommands cannot carry handlers")]
    HandlerOnBranch,

    #[error("subcommand cannot have children")]
    NestedTooDeep,

    #[error("path segment must be non-empty and contain no ':' or whitespace")]
    InvalidSegment,

    #[error("{0} cannot be registered as a root command")]
    MisplacedNode(NodeKind),

    #[error("route already registered")]
    DuplicateRoute,
}

// ============================================================================
// Router errors
// ============================================================================

/// Errors raised by route registration and dispatch.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("invalid definition at '{path}': {fault}")]
    InvalidDefinition { path: String, fault: DefinitionFault },

    #[error("invalid component '{key}': {reason}")]
    InvalidComponent { key: String, reason: &'static str },

    #[error("invalid interaction type: expected {expected}, got {actual}")]
    WrongInteractionType {
        expected: InteractionKind,
        actual: InteractionKind,
    },

    /// The interaction kind is not one the router dispatches.
    #[error("unsupported interaction type: {0}")]
    UnsupportedInteraction(InteractionKind),

    #[error("command not registered: {0}")]
    RouteNotFound(String),

    #[error("component not registered: {0}")]
    ComponentNotFound(String),

    /// Error produced by the matched handler, passed through as-is.
    #[error(transparent)]
    Handler(HandlerError),
}

impl RouterError {
    pub(crate) fn definition(path: impl Into<String>, fault: DefinitionFault) -> Self {
        Self::InvalidDefinition {
            path: path.into(),
            fault,
        }
    }

    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDefinition { .. } => "invalid_definition",
            Self::InvalidComponent { .. } => "invalid_component",
            Self::WrongInteractionType { .. } => "wrong_interaction_type",
            Self::UnsupportedInteraction(_) => "unsupported_interaction",
            Self::RouteNotFound(_) => "route_not_found",
            Self::ComponentNotFound(_) => "component_not_found",
            Self::Handler(_) => "handler_error",
        }
    }

    /// True when no handler was registered for the interaction.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RouteNotFound(_) | Self::ComponentNotFound(_))
    }

    /// The handler's own error, if this is one.
    pub fn into_handler_error(self) -> Option<HandlerError> {
        match self {
            Self::Handler(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for router operations.
pub type RouterResult<T> = Result<T, RouterError>;
