//! Inbound interaction events.

use crate::kind::{ComponentKind, InteractionKind};
use crate::option::CommandOption;

/// Payload of a command or autocomplete interaction.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandData {
    /// Root command name.
    pub name: String,
    /// Top-level options. A subcommand or group selection, if any, comes first.
    #[cfg_attr(feature = "serde", serde(default))]
    pub options: Vec<CommandOption>,
}

/// Payload of a component interaction.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentData {
    /// Developer-defined identifier attached to the component when it was sent.
    pub custom_id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub component_kind: ComponentKind,
    /// Selected values for select menus; empty for buttons.
    #[cfg_attr(feature = "serde", serde(default))]
    pub values: Vec<String>,
}

/// Interaction payload, shaped by the interaction kind.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InteractionData {
    Command(CommandData),
    Component(ComponentData),
    #[default]
    None,
}

/// One inbound interaction event.
///
/// Created by the transport layer per event and consumed by a single
/// dispatch call.
///
/// # Example
///
/// ```
/// use slashroute_proto::{CommandOption, Interaction, InteractionKind};
///
/// let ev = Interaction::command("user", vec![
///     CommandOption::subcommand("ban", vec![CommandOption::string("reason", "spam")]),
/// ]);
/// assert_eq!(ev.kind, InteractionKind::Command);
/// assert_eq!(ev.command_data().map(|d| d.name.as_str()), Some("user"));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interaction {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: u64,
    pub kind: InteractionKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub data: InteractionData,
    #[cfg_attr(feature = "serde", serde(default))]
    pub guild_id: Option<u64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub channel_id: Option<u64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub user_id: Option<u64>,
}

impl Interaction {
    /// Create an interaction from raw parts.
    pub fn new(kind: InteractionKind, data: InteractionData) -> Self {
        Self {
            id: 0,
            kind,
            data,
            guild_id: None,
            channel_id: None,
            user_id: None,
        }
    }

    /// A slash command invocation.
    pub fn command(name: impl Into<String>, options: Vec<CommandOption>) -> Self {
        Self::new(
            InteractionKind::Command,
            InteractionData::Command(CommandData {
                name: name.into(),
                options,
            }),
        )
    }

    /// An autocomplete request. One option in the tree is expected to be focused.
    pub fn autocomplete(name: impl Into<String>, options: Vec<CommandOption>) -> Self {
        Self::new(
            InteractionKind::Autocomplete,
            InteractionData::Command(CommandData {
                name: name.into(),
                options,
            }),
        )
    }

    /// A button press on a component carrying `custom_id`.
    pub fn component(custom_id: impl Into<String>) -> Self {
        Self::new(
            InteractionKind::Component,
            InteractionData::Component(ComponentData {
                custom_id: custom_id.into(),
                ..ComponentData::default()
            }),
        )
    }

    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn with_guild(mut self, guild_id: u64) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    #[must_use]
    pub fn with_channel(mut self, channel_id: u64) -> Self {
        self.channel_id = Some(channel_id);
        self
    }

    #[must_use]
    pub fn with_user(mut self, user_id: u64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Command payload, present for command and autocomplete interactions.
    pub fn command_data(&self) -> Option<&CommandData> {
        match &self.data {
            InteractionData::Command(data) => Some(data),
            _ => None,
        }
    }

    /// Component payload, present for component interactions.
    pub fn component_data(&self) -> Option<&ComponentData> {
        match &self.data {
            InteractionData::Component(data) => Some(data),
            _ => None,
        }
    }
}
