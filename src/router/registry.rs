//! Route table and dispatch.
//!
//! The [`Router`] owns three tables: primary command routes, autocomplete
//! routes (both keyed by colon-joined path) and component handlers (keyed by
//! the component key strategy). Tables sit behind reader/writer locks, so
//! any number of dispatches read concurrently while registration briefly
//! excludes them.
//!
//! Registration is atomic: a batch is validated and staged in full before
//! the live table is touched, so a rejected batch leaves no partial routes.
//! Handlers run on the caller's thread after the table lock is released.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use slashroute_proto::{Interaction, InteractionKind};
use tracing::{debug, info};

use super::component::{ComponentKey, ComponentKeyFn};
use super::path::{self, PendingRoute};
use super::traits::{CommandHandler, ComponentHandler};
use crate::config::RouterConfig;
use crate::definition::{CommandDef, Component};
use crate::error::{DefinitionFault, RouterError, RouterResult};
use crate::telemetry::{DispatchTimer, spans};

/// A registered handler plus its dispatch counter.
struct Route<H: ?Sized> {
    handler: Arc<H>,
    hits: AtomicU64,
}

impl<H: ?Sized> Route<H> {
    fn new(handler: Arc<H>) -> Self {
        Self {
            handler,
            hits: AtomicU64::new(0),
        }
    }

    /// Count the hit and hand out the handler.
    #[inline]
    fn take(&self) -> Arc<H> {
        self.hits.fetch_add(1, Ordering::Relaxed);
        Arc::clone(&self.handler)
    }
}

type CommandTable<T> = HashMap<String, Route<dyn CommandHandler<T>>>;

struct RouteTable<T> {
    commands: CommandTable<T>,
    autocompletes: CommandTable<T>,
}

/// Path-keyed dispatch table for commands, autocomplete and components.
///
/// `T` is the payload handlers return; it defaults to a plain text reply.
pub struct Router<T = String> {
    routes: RwLock<RouteTable<T>>,
    components: RwLock<HashMap<String, Route<dyn ComponentHandler<T>>>>,
    component_key: ComponentKeyFn,
}

impl<T> Router<T> {
    /// Create an empty router keyed by component custom id.
    pub fn new() -> Self {
        Self {
            routes: RwLock::new(RouteTable {
                commands: HashMap::new(),
                autocompletes: HashMap::new(),
            }),
            components: RwLock::new(HashMap::new()),
            component_key: ComponentKey::CustomId.into_fn(),
        }
    }

    /// Create an empty router configured from the `[router]` section.
    pub fn from_config(config: &RouterConfig) -> Self {
        Self::new().with_component_key(config.component_key())
    }

    /// Use a built-in component key strategy.
    #[must_use]
    pub fn with_component_key(mut self, key: ComponentKey) -> Self {
        self.component_key = key.into_fn();
        self
    }

    /// Use a custom component key strategy.
    ///
    /// Returning `None` means the interaction carries no usable key; the
    /// dispatch then fails with [`RouterError::ComponentNotFound`].
    #[must_use]
    pub fn with_component_key_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Interaction) -> Option<String> + Send + Sync + 'static,
    {
        self.component_key = Arc::new(f);
        self
    }

    // ------------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------------

    /// Flatten and register every command tree in `defs`.
    ///
    /// Returns the number of routes added. Fails on the first invalid
    /// definition or duplicate path, in which case nothing is registered.
    pub fn register_all(&self, defs: &[CommandDef<T>]) -> RouterResult<usize> {
        let _span = spans::register("commands", defs.len()).entered();

        let mut staged: Vec<PendingRoute<T>> = Vec::new();
        let mut seen = HashSet::new();
        for def in defs {
            for route in path::registration_routes(def)? {
                if !seen.insert(route.path.clone()) {
                    return Err(RouterError::definition(
                        route.path,
                        DefinitionFault::DuplicateRoute,
                    ));
                }
                staged.push(route);
            }
        }

        let mut table = self.routes.write();
        if let Some(dup) = staged.iter().find(|r| table.commands.contains_key(&r.path)) {
            return Err(RouterError::definition(
                dup.path.clone(),
                DefinitionFault::DuplicateRoute,
            ));
        }

        let added = staged.len();
        for route in staged {
            debug!(
                path = %route.path,
                autocomplete = route.autocomplete.is_some(),
                "route registered"
            );
            if let Some(autocomplete) = route.autocomplete {
                table
                    .autocompletes
                    .insert(route.path.clone(), Route::new(autocomplete));
            }
            table.commands.insert(route.path, Route::new(route.execute));
        }
        drop(table);

        info!(routes = added, "registered command routes");
        Ok(added)
    }

    /// Register component handlers.
    ///
    /// Keys must be non-blank and unique. Like [`Router::register_all`] the
    /// batch is applied all-or-nothing.
    pub fn register_components(&self, components: &[Component<T>]) -> RouterResult<usize> {
        let _span = spans::register("components", components.len()).entered();

        let mut seen = HashSet::new();
        for component in components {
            if component.key.trim().is_empty() {
                return Err(RouterError::InvalidComponent {
                    key: component.key.clone(),
                    reason: "key is blank",
                });
            }
            if !seen.insert(component.key.as_str()) {
                return Err(RouterError::InvalidComponent {
                    key: component.key.clone(),
                    reason: "key already registered",
                });
            }
        }

        let mut table = self.components.write();
        if let Some(dup) = components.iter().find(|c| table.contains_key(&c.key)) {
            return Err(RouterError::InvalidComponent {
                key: dup.key.clone(),
                reason: "key already registered",
            });
        }

        let added = components.len();
        for component in components {
            debug!(key = %component.key, "component registered");
            table.insert(
                component.key.clone(),
                Route::new(Arc::clone(&component.handler)),
            );
        }
        drop(table);

        info!(components = added, "registered component handlers");
        Ok(added)
    }

    // ------------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------------

    /// Snapshot of the primary route table.
    ///
    /// The returned map is a copy; changing it does not affect the router.
    pub fn get_all(&self) -> HashMap<String, Arc<dyn CommandHandler<T>>> {
        self.routes
            .read()
            .commands
            .iter()
            .map(|(path, route)| (path.clone(), Arc::clone(&route.handler)))
            .collect()
    }

    /// Registered command paths, sorted.
    pub fn routes(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.routes.read().commands.keys().cloned().collect();
        paths.sort_unstable();
        paths
    }

    /// Registered component keys, sorted.
    pub fn component_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.components.read().keys().cloned().collect();
        keys.sort_unstable();
        keys
    }

    pub fn contains(&self, path: &str) -> bool {
        self.routes.read().commands.contains_key(path)
    }

    pub fn has_autocomplete(&self, path: &str) -> bool {
        self.routes.read().autocompletes.contains_key(path)
    }

    /// Number of primary routes.
    pub fn len(&self) -> usize {
        self.routes.read().commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.read().commands.is_empty()
    }

    /// Dispatch counts of command routes that were used at least once,
    /// most used first.
    pub fn route_stats(&self) -> Vec<(String, u64)> {
        let mut stats: Vec<_> = self
            .routes
            .read()
            .commands
            .iter()
            .map(|(path, route)| (path.clone(), route.hits.load(Ordering::Relaxed)))
            .filter(|(_, count)| *count > 0)
            .collect();

        stats.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        stats
    }

    // ------------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------------

    /// Route a slash command to its primary handler.
    pub fn find_and_execute(&self, interaction: &Interaction) -> RouterResult<T> {
        self.run_command(interaction, InteractionKind::Command, |table| {
            &table.commands
        })
    }

    /// Route an autocomplete request to its autocomplete handler.
    pub fn find_and_autocomplete(&self, interaction: &Interaction) -> RouterResult<T> {
        self.run_command(interaction, InteractionKind::Autocomplete, |table| {
            &table.autocompletes
        })
    }

    /// Route a component activation by its extracted key.
    pub fn find_and_execute_component(&self, interaction: &Interaction) -> RouterResult<T> {
        expect_kind(interaction, InteractionKind::Component)?;

        let key = (self.component_key)(interaction).ok_or_else(|| {
            debug!("component interaction carries no key");
            RouterError::ComponentNotFound(String::new())
        })?;

        let _span = spans::dispatch(interaction.kind, &key).entered();
        let _timer = DispatchTimer::start();

        let handler = self.components.read().get(&key).map(Route::take);
        let Some(handler) = handler else {
            debug!(key = %key, "component not registered");
            return Err(RouterError::ComponentNotFound(key));
        };

        handler.handle(interaction).map_err(RouterError::Handler)
    }

    /// Route any supported interaction by its kind.
    ///
    /// Ping and modal submissions are not routed and fail with
    /// [`RouterError::UnsupportedInteraction`].
    pub fn dispatch(&self, interaction: &Interaction) -> RouterResult<T> {
        match interaction.kind {
            InteractionKind::Command => self.find_and_execute(interaction),
            InteractionKind::Autocomplete => self.find_and_autocomplete(interaction),
            InteractionKind::Component => self.find_and_execute_component(interaction),
            other => Err(RouterError::UnsupportedInteraction(other)),
        }
    }

    fn run_command(
        &self,
        interaction: &Interaction,
        expected: InteractionKind,
        table: fn(&RouteTable<T>) -> &CommandTable<T>,
    ) -> RouterResult<T> {
        expect_kind(interaction, expected)?;

        let Some(data) = interaction.command_data() else {
            debug!(kind = %expected, "interaction carries no command payload");
            return Err(RouterError::RouteNotFound(String::new()));
        };

        let resolved = path::resolve(data);
        let _span = spans::dispatch(expected, &resolved.path).entered();
        let _timer = DispatchTimer::start();

        let handler = table(&self.routes.read()).get(&resolved.path).map(Route::take);
        let Some(handler) = handler else {
            debug!(path = %resolved.path, "route not registered");
            return Err(RouterError::RouteNotFound(resolved.path));
        };

        handler
            .handle(interaction, &resolved.options)
            .map_err(RouterError::Handler)
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn expect_kind(interaction: &Interaction, expected: InteractionKind) -> RouterResult<()> {
    if interaction.kind == expected {
        Ok(())
    } else {
        Err(RouterError::WrongInteractionType {
            expected,
            actual: interaction.kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HandlerResult;
    use crate::router::OptionMap;
    use slashroute_proto::CommandOption;

    fn reply(
        text: &'static str,
    ) -> impl Fn(&Interaction, &OptionMap<'_>) -> HandlerResult + Send + Sync {
        move |_, _| Ok(text.to_string())
    }

    #[test]
    fn new_router_is_empty() {
        let router: Router = Router::new();
        assert!(router.is_empty());
        assert_eq!(router.len(), 0);
        assert!(router.routes().is_empty());
    }

    #[test]
    fn empty_batch_registers_nothing() {
        let router: Router = Router::new();
        assert_eq!(router.register_all(&[]).unwrap(), 0);
        assert!(router.is_empty());
    }

    #[test]
    fn counts_routes_and_autocompletes() {
        let router: Router = Router::new();
        let added = router
            .register_all(&[
                CommandDef::command("ping").execute(reply("pong")),
                CommandDef::command("search").child(
                    CommandDef::subcommand("docs")
                        .execute(reply("docs"))
                        .autocomplete(reply("suggest")),
                ),
            ])
            .unwrap();

        assert_eq!(added, 2);
        assert_eq!(router.routes(), ["ping", "search:docs"]);
        assert!(router.has_autocomplete("search:docs"));
        assert!(!router.has_autocomplete("ping"));
    }

    #[test]
    fn failed_batch_leaves_table_untouched() {
        let router: Router = Router::new();
        let err = router
            .register_all(&[
                CommandDef::command("ping").execute(reply("pong")),
                CommandDef::command("broken"),
            ])
            .unwrap_err();

        assert!(matches!(
            err,
            RouterError::InvalidDefinition {
                fault: DefinitionFault::MissingHandler,
                ..
            }
        ));
        assert!(router.is_empty());
    }

    #[test]
    fn duplicate_within_batch_is_rejected() {
        let router: Router = Router::new();
        let err = router
            .register_all(&[
                CommandDef::command("ping").execute(reply("a")),
                CommandDef::command("ping").execute(reply("b")),
            ])
            .unwrap_err();
        assert!(matches!(
            err,
            RouterError::InvalidDefinition { ref path, fault: DefinitionFault::DuplicateRoute } if path == "ping"
        ));
        assert!(router.is_empty());
    }

    #[test]
    fn duplicate_against_table_is_rejected() {
        let router: Router = Router::new();
        router
            .register_all(&[CommandDef::command("ping").execute(reply("a"))])
            .unwrap();
        let err = router
            .register_all(&[
                CommandDef::command("echo").execute(reply("e")),
                CommandDef::command("ping").execute(reply("b")),
            ])
            .unwrap_err();
        assert_eq!(err.error_code(), "invalid_definition");
        assert_eq!(router.routes(), ["ping"]);
    }

    #[test]
    fn get_all_is_a_snapshot() {
        let router: Router = Router::new();
        router
            .register_all(&[CommandDef::command("ping").execute(reply("pong"))])
            .unwrap();

        let mut snapshot = router.get_all();
        snapshot.clear();
        assert_eq!(router.len(), 1);
        assert_eq!(router.get_all().len(), 1);
    }

    #[test]
    fn dispatch_routes_by_kind() {
        let router: Router = Router::new();
        router
            .register_all(&[CommandDef::command("find")
                .execute(reply("run"))
                .autocomplete(reply("complete"))])
            .unwrap();
        router
            .register_components(&[Component::new("ok", |_: &Interaction| {
                Ok("clicked".to_string())
            })])
            .unwrap();

        assert_eq!(router.dispatch(&Interaction::command("find", vec![])).unwrap(), "run");
        assert_eq!(
            router
                .dispatch(&Interaction::autocomplete(
                    "find",
                    vec![CommandOption::string("q", "x").with_focus()]
                ))
                .unwrap(),
            "complete"
        );
        assert_eq!(router.dispatch(&Interaction::component("ok")).unwrap(), "clicked");

        for kind in [InteractionKind::Ping, InteractionKind::ModalSubmit] {
            let ev = Interaction::new(kind, Default::default());
            assert!(matches!(
                router.dispatch(&ev),
                Err(RouterError::UnsupportedInteraction(k)) if k == kind
            ));
        }
    }

    #[test]
    fn command_kind_without_payload_is_not_found() {
        let router: Router = Router::new();
        let ev = Interaction::new(InteractionKind::Command, Default::default());
        assert!(matches!(
            router.find_and_execute(&ev),
            Err(RouterError::RouteNotFound(ref p)) if p.is_empty()
        ));
    }

    #[test]
    fn stats_count_dispatches() {
        let router: Router = Router::new();
        router
            .register_all(&[
                CommandDef::command("a").execute(reply("a")),
                CommandDef::command("b").execute(reply("b")),
                CommandDef::command("c").execute(reply("c")),
            ])
            .unwrap();

        for _ in 0..3 {
            router.find_and_execute(&Interaction::command("b", vec![])).unwrap();
        }
        router.find_and_execute(&Interaction::command("a", vec![])).unwrap();

        assert_eq!(
            router.route_stats(),
            [("b".to_string(), 3), ("a".to_string(), 1)]
        );
    }

    #[test]
    fn handler_may_reenter_router() {
        let router: Arc<Router> = Arc::new(Router::new());
        let weak = Arc::downgrade(&router);
        router
            .register_all(&[
                CommandDef::command("inner").execute(reply("inner")),
                CommandDef::command("outer").execute(move |ev, _| {
                    let router = weak.upgrade().ok_or("router dropped")?;
                    let inner = Interaction::command("inner", vec![]).with_id(ev.id);
                    router.find_and_execute(&inner).map_err(Into::into)
                }),
            ])
            .unwrap();

        assert_eq!(
            router.find_and_execute(&Interaction::command("outer", vec![])).unwrap(),
            "inner"
        );
    }

    #[test]
    fn from_config_uses_prefix_keys() {
        let config = RouterConfig {
            component_key: crate::config::ComponentKeyMode::Prefix,
            component_separator: ":".into(),
        };
        let router: Router = Router::from_config(&config);
        router
            .register_components(&[Component::new("vote", |ev: &Interaction| {
                Ok(ev.component_data().map(|d| d.custom_id.clone()).unwrap_or_default())
            })])
            .unwrap();

        assert_eq!(
            router.find_and_execute_component(&Interaction::component("vote:7")).unwrap(),
            "vote:7"
        );
    }
}
