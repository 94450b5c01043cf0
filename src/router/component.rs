//! Component key extraction.
//!
//! Component interactions are not routed by the command path. Instead a
//! key is pulled out of the interaction and looked up in a separate table.
//! The extraction is a strategy chosen when the router is built.

use std::fmt;
use std::sync::Arc;

use slashroute_proto::Interaction;

/// Key extraction function for component interactions.
pub type ComponentKeyFn = Arc<dyn Fn(&Interaction) -> Option<String> + Send + Sync>;

/// Built-in key extraction strategies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ComponentKey {
    /// The whole custom identifier is the key.
    #[default]
    CustomId,
    /// The custom identifier up to the first `separator` is the key, so
    /// `vote:42` and `vote:43` both route to `vote`.
    Prefix { separator: String },
}

impl ComponentKey {
    /// Extract the key from a component interaction.
    pub fn extract(&self, interaction: &Interaction) -> Option<String> {
        let custom_id = interaction.component_data()?.custom_id.as_str();
        match self {
            Self::CustomId => Some(custom_id.to_owned()),
            Self::Prefix { separator } if separator.is_empty() => Some(custom_id.to_owned()),
            Self::Prefix { separator } => Some(
                custom_id
                    .split_once(separator.as_str())
                    .map_or(custom_id, |(head, _)| head)
                    .to_owned(),
            ),
        }
    }

    pub(crate) fn into_fn(self) -> ComponentKeyFn {
        Arc::new(move |interaction: &Interaction| self.extract(interaction))
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CustomId => f.write_str("custom_id"),
            Self::Prefix { separator } => write!(f, "prefix({separator:?})"),
        }
    }
}
