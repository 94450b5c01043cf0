//! Error types for the interaction model.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtoError`].
pub type Result<T, E = ProtoError> = std::result::Result<T, E>;

/// Errors raised while converting raw platform values into model types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtoError {
    /// The interaction type code is not one the platform defines.
    #[error("unknown interaction type code: {0}")]
    UnknownInteractionKind(u8),

    /// The option type code is not one the platform defines.
    #[error("unknown option type code: {0}")]
    UnknownOptionKind(u8),

    /// The component type code is not one the platform defines.
    #[error("unknown component type code: {0}")]
    UnknownComponentKind(u8),
}
