//! Integration test common infrastructure.
//!
//! Handler fixtures that report what they were called with, so tests can
//! assert on the resolved route and option map through the public API only.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use slashroute::{HandlerResult, OptionMap};
use slashroute_proto::{Interaction, OptionValue};

/// Handler that always answers `text`.
pub fn reply(
    text: &'static str,
) -> impl Fn(&Interaction, &OptionMap<'_>) -> HandlerResult + Send + Sync + 'static {
    move |_, _| Ok(text.to_string())
}

/// Handler that answers `tag` followed by the options it received, sorted
/// by name: `tag{a=1,b=x}`.
pub fn describe(
    tag: &'static str,
) -> impl Fn(&Interaction, &OptionMap<'_>) -> HandlerResult + Send + Sync + 'static {
    move |_, opts| Ok(format!("{tag}{{{}}}", render_options(opts)))
}

/// Handler that always fails with `message`.
pub fn fail(
    message: &'static str,
) -> impl Fn(&Interaction, &OptionMap<'_>) -> HandlerResult + Send + Sync + 'static {
    move |_, _| Err(message.into())
}

/// Counts invocations.
#[derive(Default, Clone)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn handler(
        &self,
        text: &'static str,
    ) -> impl Fn(&Interaction, &OptionMap<'_>) -> HandlerResult + Send + Sync + 'static {
        let calls = Arc::clone(&self.0);
        move |_, _| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(text.to_string())
        }
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

pub fn render_options(opts: &OptionMap<'_>) -> String {
    let mut pairs: Vec<String> = opts
        .iter()
        .map(|(name, opt)| match &opt.value {
            Some(value) => format!("{name}={}", render_value(value)),
            None => name.to_string(),
        })
        .collect();
    pairs.sort_unstable();
    pairs.join(",")
}

fn render_value(value: &OptionValue) -> String {
    match value {
        OptionValue::String(s) => s.clone(),
        OptionValue::Integer(n) => n.to_string(),
        OptionValue::Number(n) => n.to_string(),
        OptionValue::Boolean(b) => b.to_string(),
        OptionValue::Snowflake(id) => id.to_string(),
    }
}
