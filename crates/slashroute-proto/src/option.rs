//! Command options as delivered with an interaction.

use crate::kind::OptionKind;

/// A scalar option value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OptionValue {
    String(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    /// Platform object id (user, channel, role, attachment).
    Snowflake(u64),
}

impl OptionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Numbers and integers both widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_snowflake(&self) -> Option<u64> {
        match self {
            Self::Snowflake(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for OptionValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

/// One option of an interaction.
///
/// Options of kind [`OptionKind::Subcommand`] or [`OptionKind::SubcommandGroup`]
/// carry no value; the selected subcommand (and its arguments) live in
/// `options`. Every other kind carries a `value` and no nested options.
///
/// # Example
///
/// ```
/// use slashroute_proto::CommandOption;
///
/// let ban = CommandOption::subcommand("ban", vec![
///     CommandOption::string("reason", "spam"),
///     CommandOption::integer("days", 7),
/// ]);
/// assert_eq!(ban.options.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandOption {
    pub name: String,
    pub kind: OptionKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: Option<OptionValue>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub options: Vec<CommandOption>,
    /// Set by the platform on the option currently being autocompleted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub focused: bool,
}

impl CommandOption {
    /// Create an option from raw parts.
    pub fn new(name: impl Into<String>, kind: OptionKind, value: Option<OptionValue>) -> Self {
        Self {
            name: name.into(),
            kind,
            value,
            options: Vec::new(),
            focused: false,
        }
    }

    /// A subcommand selection with its arguments.
    pub fn subcommand(name: impl Into<String>, options: Vec<CommandOption>) -> Self {
        Self {
            options,
            ..Self::new(name, OptionKind::Subcommand, None)
        }
    }

    /// A subcommand-group selection; `options` should hold the chosen subcommand.
    pub fn group(name: impl Into<String>, options: Vec<CommandOption>) -> Self {
        Self {
            options,
            ..Self::new(name, OptionKind::SubcommandGroup, None)
        }
    }

    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, OptionKind::String, Some(OptionValue::String(value.into())))
    }

    pub fn integer(name: impl Into<String>, value: i64) -> Self {
        Self::new(name, OptionKind::Integer, Some(OptionValue::Integer(value)))
    }

    pub fn number(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, OptionKind::Number, Some(OptionValue::Number(value)))
    }

    pub fn boolean(name: impl Into<String>, value: bool) -> Self {
        Self::new(name, OptionKind::Boolean, Some(OptionValue::Boolean(value)))
    }

    pub fn user(name: impl Into<String>, id: u64) -> Self {
        Self::new(name, OptionKind::User, Some(OptionValue::Snowflake(id)))
    }

    pub fn channel(name: impl Into<String>, id: u64) -> Self {
        Self::new(name, OptionKind::Channel, Some(OptionValue::Snowflake(id)))
    }

    pub fn role(name: impl Into<String>, id: u64) -> Self {
        Self::new(name, OptionKind::Role, Some(OptionValue::Snowflake(id)))
    }

    /// Mark this option as the one being autocompleted.
    #[must_use]
    pub fn with_focus(mut self) -> Self {
        self.focused = true;
        self
    }

    /// True when this option selects a nested level.
    #[inline]
    pub fn is_nesting(&self) -> bool {
        self.kind.is_nesting()
    }
}
