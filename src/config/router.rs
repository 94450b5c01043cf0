//! Router configuration.

use serde::Deserialize;

use crate::router::ComponentKey;

/// How component interactions are keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKeyMode {
    /// Use the whole custom identifier.
    #[default]
    CustomId,
    /// Use the custom identifier up to `component_separator`.
    Prefix,
}

/// The `[router]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouterConfig {
    /// Component key strategy (default: `custom_id`).
    #[serde(default)]
    pub component_key: ComponentKeyMode,
    /// Separator for the `prefix` strategy (default: `:`).
    #[serde(default = "default_component_separator")]
    pub component_separator: String,
}

impl RouterConfig {
    /// The component key strategy described by this section.
    pub fn component_key(&self) -> ComponentKey {
        match self.component_key {
            ComponentKeyMode::CustomId => ComponentKey::CustomId,
            ComponentKeyMode::Prefix => ComponentKey::Prefix {
                separator: self.component_separator.clone(),
            },
        }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            component_key: ComponentKeyMode::default(),
            component_separator: default_component_separator(),
        }
    }
}

fn default_component_separator() -> String {
    ":".to_string()
}
