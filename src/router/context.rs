//! Per-dispatch handler context.
//!
//! An [`OptionMap`] is built fresh for every dispatch from the effective leaf
//! level of an interaction's options. It borrows from the interaction, so
//! building one never clones option values.

use std::collections::HashMap;

use slashroute_proto::{CommandOption, OptionValue};

/// Options of the resolved leaf level, keyed by option name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionMap<'a> {
    inner: HashMap<&'a str, &'a CommandOption>,
}

impl<'a> OptionMap<'a> {
    /// The option named `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&'a CommandOption> {
        self.inner.get(name).copied()
    }

    /// The scalar value of option `name`, if it has one.
    pub fn value(&self, name: &str) -> Option<&'a OptionValue> {
        self.get(name).and_then(|opt| opt.value.as_ref())
    }

    pub fn str(&self, name: &str) -> Option<&'a str> {
        self.value(name).and_then(OptionValue::as_str)
    }

    pub fn i64(&self, name: &str) -> Option<i64> {
        self.value(name).and_then(OptionValue::as_i64)
    }

    pub fn f64(&self, name: &str) -> Option<f64> {
        self.value(name).and_then(OptionValue::as_f64)
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.value(name).and_then(OptionValue::as_bool)
    }

    pub fn snowflake(&self, name: &str) -> Option<u64> {
        self.value(name).and_then(OptionValue::as_snowflake)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over `(name, option)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a CommandOption)> + '_ {
        self.inner.iter().map(|(name, opt)| (*name, *opt))
    }

    /// The option the user is currently typing into (autocomplete requests).
    pub fn focused(&self) -> Option<&'a CommandOption> {
        self.inner.values().copied().find(|opt| opt.focused)
    }
}

impl<'a> FromIterator<&'a CommandOption> for OptionMap<'a> {
    fn from_iter<I: IntoIterator<Item = &'a CommandOption>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().map(|opt| (opt.name.as_str(), opt)).collect(),
        }
    }
}

/// Route key and options recomputed from a live interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'a> {
    pub path: String,
    pub options: OptionMap<'a>,
}
