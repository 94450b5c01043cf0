//! Route path construction.
//!
//! Two algorithms compute the same colon-joined key from different inputs:
//!
//! - [`registration_routes`] walks a declared [`CommandDef`] tree and emits
//!   one route per invocable leaf.
//! - [`resolve`] rebuilds the key from the option nesting of a live
//!   interaction.
//!
//! The two must agree for every accepted tree, otherwise a command is
//! registered under a key no interaction can ever produce:
//!
//! | Tree shape                      | Interaction shape                        | Key               |
//! |---------------------------------|------------------------------------------|-------------------|
//! | root with handler               | no options, or scalar options            | `root`            |
//! | root → subcommand               | first option is a subcommand             | `root:sub`        |
//! | root → group → subcommand       | first option is a group holding the sub  | `root:group:sub`  |

use std::sync::Arc;

use slashroute_proto::{CommandData, CommandOption, OptionKind};

use super::context::{OptionMap, Resolved};
use super::traits::CommandHandler;
use crate::definition::{CommandDef, Handlers, NodeKind};
use crate::error::{DefinitionFault, RouterError, RouterResult};

/// Separator between path segments.
pub const SEPARATOR: char = ':';

/// Join path segments into a route key.
pub fn join<S: AsRef<str>>(segments: &[S]) -> String {
    let mut path = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            path.push(SEPARATOR);
        }
        path.push_str(segment.as_ref());
    }
    path
}

/// A flattened route waiting to be inserted into a route table.
pub struct PendingRoute<T> {
    pub path: String,
    pub execute: Arc<dyn CommandHandler<T>>,
    pub autocomplete: Option<Arc<dyn CommandHandler<T>>>,
}

/// Flatten one command tree into its routes.
///
/// Rejections are strict: anything that would leave a declared handler
/// unreachable, or a node that cannot be reached at all, fails with
/// [`RouterError::InvalidDefinition`] naming the offending path.
pub fn registration_routes<T>(def: &CommandDef<T>) -> RouterResult<Vec<PendingRoute<T>>> {
    let mut stack: Vec<&str> = Vec::with_capacity(3);
    let mut routes = Vec::new();

    push_segment(&mut stack, &def.segment)?;

    if def.kind != NodeKind::Command {
        return Err(RouterError::definition(
            join(&stack),
            DefinitionFault::MisplacedNode(def.kind),
        ));
    }

    // A root that branches into subcommands is never invoked bare.
    let branches = def.children.iter().any(|c| c.kind != NodeKind::Command);
    if branches && !def.handlers.is_empty() {
        return Err(RouterError::definition(
            join(&stack),
            DefinitionFault::HandlerOnBranch,
        ));
    }

    match def.handlers.execute {
        Some(_) => routes.push(pending(&stack, &def.handlers)?),
        // Autocomplete alone is unreachable: the platform only completes
        // options of a command that can also be executed.
        None if def.children.is_empty() || def.handlers.autocomplete.is_some() => {
            return Err(RouterError::definition(
                join(&stack),
                DefinitionFault::MissingHandler,
            ));
        }
        None => {}
    }

    for child in &def.children {
        push_segment(&mut stack, &child.segment)?;

        match child.kind {
            NodeKind::Subcommand => routes.push(leaf(&stack, child)?),
            NodeKind::SubcommandGroup => {
                if !child.handlers.is_empty() {
                    return Err(RouterError::definition(
                        join(&stack),
                        DefinitionFault::HandlerOnGroup,
                    ));
                }
                if child.children.is_empty() {
                    return Err(RouterError::definition(
                        join(&stack),
                        DefinitionFault::EmptyGroup,
                    ));
                }

                for sub in &child.children {
                    push_segment(&mut stack, &sub.segment)?;
                    if sub.kind != NodeKind::Subcommand {
                        return Err(RouterError::definition(
                            join(&stack),
                            DefinitionFault::UnexpectedChild(sub.kind),
                        ));
                    }
                    routes.push(leaf(&stack, sub)?);
                    stack.pop();
                }
            }
            // Plain nodes describe scalar options; they never form a path
            // segment, so they are only meaningful under an executable root.
            NodeKind::Command if def.handlers.execute.is_some() => {}
            NodeKind::Command => {
                return Err(RouterError::definition(
                    join(&stack),
                    DefinitionFault::UnexpectedChild(NodeKind::Command),
                ));
            }
        }

        stack.pop();
    }

    Ok(routes)
}

fn push_segment<'a>(stack: &mut Vec<&'a str>, segment: &'a str) -> RouterResult<()> {
    stack.push(segment);
    if is_valid_segment(segment) {
        Ok(())
    } else {
        Err(RouterError::definition(
            join(stack.as_slice()),
            DefinitionFault::InvalidSegment,
        ))
    }
}

/// Segments end up joined with [`SEPARATOR`], so they must not contain it.
fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains(SEPARATOR) && !segment.contains(char::is_whitespace)
}

fn leaf<T>(stack: &[&str], node: &CommandDef<T>) -> RouterResult<PendingRoute<T>> {
    if !node.children.is_empty() {
        return Err(RouterError::definition(
            join(stack),
            DefinitionFault::NestedTooDeep,
        ));
    }
    pending(stack, &node.handlers)
}

fn pending<T>(stack: &[&str], handlers: &Handlers<T>) -> RouterResult<PendingRoute<T>> {
    let path = join(stack);
    match &handlers.execute {
        Some(execute) => Ok(PendingRoute {
            path,
            execute: Arc::clone(execute),
            autocomplete: handlers.autocomplete.clone(),
        }),
        None => Err(RouterError::definition(path, DefinitionFault::MissingHandler)),
    }
}

/// Rebuild the route key and leaf options from a live interaction.
///
/// Only the first top-level option can select a nested level. A group
/// option is assumed to hold the chosen subcommand as its first option; if
/// it holds nothing the key stops at the group, which matches no route.
pub fn resolve(data: &CommandData) -> Resolved<'_> {
    let mut segments: Vec<&str> = vec![data.name.as_str()];
    let mut level: &[CommandOption] = &data.options;

    if let Some(first) = data.options.first() {
        match first.kind {
            OptionKind::Subcommand => {
                segments.push(&first.name);
                level = &first.options;
            }
            OptionKind::SubcommandGroup => {
                segments.push(&first.name);
                level = &first.options;
                if let Some(sub) = first.options.first() {
                    segments.push(&sub.name);
                    level = &sub.options;
                }
            }
            _ => {}
        }
    }

    Resolved {
        path: join(&segments),
        options: flatten(level),
    }
}

/// Map each option of one level by name.
#[inline]
pub fn flatten(options: &[CommandOption]) -> OptionMap<'_> {
    options.iter().collect()
}
