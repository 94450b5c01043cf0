//! Type tags carried by interactions, options and components.
//!
//! Every tag has a stable numeric code assigned by the platform. Conversion
//! from a raw code goes through `TryFrom<u8>` and reports unknown codes as a
//! [`ProtoError`] instead of guessing.

use std::fmt;

use crate::error::ProtoError;

/// The kind of an inbound interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InteractionKind {
    /// Platform health check.
    Ping,
    /// A slash command invocation.
    Command,
    /// A UI component (button, select menu) was activated.
    Component,
    /// The user is typing into an option that supports autocomplete.
    Autocomplete,
    /// A modal dialog was submitted.
    ModalSubmit,
}

impl InteractionKind {
    /// Numeric code used on the wire.
    pub fn code(self) -> u8 {
        match self {
            Self::Ping => 1,
            Self::Command => 2,
            Self::Component => 3,
            Self::Autocomplete => 4,
            Self::ModalSubmit => 5,
        }
    }

    /// Lowercase name, used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::Command => "command",
            Self::Component => "component",
            Self::Autocomplete => "autocomplete",
            Self::ModalSubmit => "modal_submit",
        }
    }
}

impl TryFrom<u8> for InteractionKind {
    type Error = ProtoError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Ping),
            2 => Ok(Self::Command),
            3 => Ok(Self::Component),
            4 => Ok(Self::Autocomplete),
            5 => Ok(Self::ModalSubmit),
            other => Err(ProtoError::UnknownInteractionKind(other)),
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The type of a command option.
///
/// `Subcommand` and `SubcommandGroup` are nesting markers: an option of
/// either kind carries further options instead of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OptionKind {
    Subcommand,
    SubcommandGroup,
    String,
    Integer,
    Boolean,
    User,
    Channel,
    Role,
    Mentionable,
    Number,
    Attachment,
}

impl OptionKind {
    /// Numeric code used on the wire.
    pub fn code(self) -> u8 {
        match self {
            Self::Subcommand => 1,
            Self::SubcommandGroup => 2,
            Self::String => 3,
            Self::Integer => 4,
            Self::Boolean => 5,
            Self::User => 6,
            Self::Channel => 7,
            Self::Role => 8,
            Self::Mentionable => 9,
            Self::Number => 10,
            Self::Attachment => 11,
        }
    }

    /// True for the two kinds that select a nested level instead of holding a value.
    #[inline]
    pub fn is_nesting(self) -> bool {
        matches!(self, Self::Subcommand | Self::SubcommandGroup)
    }
}

impl TryFrom<u8> for OptionKind {
    type Error = ProtoError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Subcommand),
            2 => Ok(Self::SubcommandGroup),
            3 => Ok(Self::String),
            4 => Ok(Self::Integer),
            5 => Ok(Self::Boolean),
            6 => Ok(Self::User),
            7 => Ok(Self::Channel),
            8 => Ok(Self::Role),
            9 => Ok(Self::Mentionable),
            10 => Ok(Self::Number),
            11 => Ok(Self::Attachment),
            other => Err(ProtoError::UnknownOptionKind(other)),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Subcommand => "subcommand",
            Self::SubcommandGroup => "subcommand_group",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::User => "user",
            Self::Channel => "channel",
            Self::Role => "role",
            Self::Mentionable => "mentionable",
            Self::Number => "number",
            Self::Attachment => "attachment",
        };
        f.write_str(name)
    }
}

/// The type of an activated UI component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ComponentKind {
    #[default]
    Button,
    StringSelect,
    TextInput,
    UserSelect,
    RoleSelect,
    MentionableSelect,
    ChannelSelect,
}

impl ComponentKind {
    /// Numeric code used on the wire.
    pub fn code(self) -> u8 {
        match self {
            Self::Button => 2,
            Self::StringSelect => 3,
            Self::TextInput => 4,
            Self::UserSelect => 5,
            Self::RoleSelect => 6,
            Self::MentionableSelect => 7,
            Self::ChannelSelect => 8,
        }
    }
}

impl TryFrom<u8> for ComponentKind {
    type Error = ProtoError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            2 => Ok(Self::Button),
            3 => Ok(Self::StringSelect),
            4 => Ok(Self::TextInput),
            5 => Ok(Self::UserSelect),
            6 => Ok(Self::RoleSelect),
            7 => Ok(Self::MentionableSelect),
            8 => Ok(Self::ChannelSelect),
            other => Err(ProtoError::UnknownComponentKind(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interaction_kind_codes_roundtrip() {
        for code in 1..=5u8 {
            let kind = InteractionKind::try_from(code).unwrap();
            assert_eq!(kind.code(), code);
        }
    }

    #[test]
    fn unknown_interaction_code_is_rejected() {
        assert_eq!(
            InteractionKind::try_from(0),
            Err(ProtoError::UnknownInteractionKind(0))
        );
        assert_eq!(
            InteractionKind::try_from(6),
            Err(ProtoError::UnknownInteractionKind(6))
        );
    }

    #[test]
    fn option_kind_codes_roundtrip() {
        for code in 1..=11u8 {
            let kind = OptionKind::try_from(code).unwrap();
            assert_eq!(kind.code(), code);
        }
        assert!(OptionKind::try_from(12).is_err());
    }

    #[test]
    fn only_subcommand_kinds_nest() {
        assert!(OptionKind::Subcommand.is_nesting());
        assert!(OptionKind::SubcommandGroup.is_nesting());
        assert!(!OptionKind::String.is_nesting());
        assert!(!OptionKind::Integer.is_nesting());
    }

    #[test]
    fn component_code_one_is_action_row_not_a_component() {
        assert_eq!(
            ComponentKind::try_from(1),
            Err(ProtoError::UnknownComponentKind(1))
        );
        assert_eq!(ComponentKind::try_from(2), Ok(ComponentKind::Button));
    }

    #[test]
    fn display_names() {
        assert_eq!(InteractionKind::Autocomplete.to_string(), "autocomplete");
        assert_eq!(OptionKind::SubcommandGroup.to_string(), "subcommand_group");
    }
}
