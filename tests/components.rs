//! Component registration and dispatch.

use std::sync::Arc;

use slashroute::{Component, ComponentHandler, ComponentKey, HandlerResult, Router, RouterError};
use slashroute_proto::{ComponentData, ComponentKind, Interaction, InteractionData, InteractionKind};

fn custom_id(ev: &Interaction) -> HandlerResult {
    Ok(ev
        .component_data()
        .map(|data| data.custom_id.clone())
        .unwrap_or_default())
}

fn fixed(text: &'static str) -> impl Fn(&Interaction) -> HandlerResult + Send + Sync + 'static {
    move |_| Ok(text.to_string())
}

#[test]
fn routes_by_custom_id() {
    let router: Router = Router::new();
    router
        .register_components(&[
            Component::new("confirm", fixed("confirmed")),
            Component::new("cancel", fixed("cancelled")),
        ])
        .unwrap();

    assert_eq!(
        router
            .find_and_execute_component(&Interaction::component("cancel"))
            .unwrap(),
        "cancelled"
    );
    assert_eq!(router.component_keys(), ["cancel", "confirm"]);
}

#[test]
fn unknown_key_is_component_not_found() {
    let router: Router = Router::new();
    router
        .register_components(&[Component::new("confirm", fixed("ok"))])
        .unwrap();

    let err = router
        .find_and_execute_component(&Interaction::component("confirm:1"))
        .unwrap_err();
    assert!(matches!(err, RouterError::ComponentNotFound(ref key) if key == "confirm:1"));
    assert_eq!(err.error_code(), "component_not_found");
}

#[test]
fn command_events_are_rejected() {
    let router: Router = Router::new();
    let err = router
        .find_and_execute_component(&Interaction::command("confirm", vec![]))
        .unwrap_err();
    assert!(matches!(
        err,
        RouterError::WrongInteractionType {
            expected: InteractionKind::Component,
            actual: InteractionKind::Command,
        }
    ));
}

#[test]
fn component_without_payload_has_no_key() {
    let router: Router = Router::new();
    let ev = Interaction::new(InteractionKind::Component, Default::default());
    let err = router.find_and_execute_component(&ev).unwrap_err();
    assert!(matches!(err, RouterError::ComponentNotFound(ref key) if key.is_empty()));
}

#[test]
fn prefix_strategy_shares_one_handler() {
    let router: Router = Router::new().with_component_key(ComponentKey::Prefix {
        separator: ":".into(),
    });
    router
        .register_components(&[Component::new("vote", custom_id)])
        .unwrap();

    for id in ["vote:yes", "vote:no", "vote"] {
        assert_eq!(
            router
                .find_and_execute_component(&Interaction::component(id))
                .unwrap(),
            id
        );
    }
}

#[test]
fn custom_strategy_can_use_component_kind() {
    let router: Router = Router::new().with_component_key_fn(|ev| {
        let data = ev.component_data()?;
        match data.component_kind {
            ComponentKind::Button => Some(data.custom_id.clone()),
            other => Some(format!("select:{}", other.code())),
        }
    });
    router
        .register_components(&[
            Component::new("help", fixed("button")),
            Component::new("select:3", |ev: &Interaction| {
                Ok(ev
                    .component_data()
                    .map(|d| d.values.join(","))
                    .unwrap_or_default())
            }),
        ])
        .unwrap();

    assert_eq!(
        router
            .find_and_execute_component(&Interaction::component("help"))
            .unwrap(),
        "button"
    );

    let select = Interaction::new(
        InteractionKind::Component,
        InteractionData::Component(ComponentData {
            custom_id: "picker".into(),
            component_kind: ComponentKind::StringSelect,
            values: vec!["red".into(), "blue".into()],
        }),
    );
    assert_eq!(
        router.find_and_execute_component(&select).unwrap(),
        "red,blue"
    );
}

#[test]
fn custom_strategy_returning_none_is_not_found() {
    let router: Router = Router::new().with_component_key_fn(|_| None);
    router
        .register_components(&[Component::new("x", fixed("x"))])
        .unwrap();
    let err = router
        .find_and_execute_component(&Interaction::component("x"))
        .unwrap_err();
    assert!(matches!(err, RouterError::ComponentNotFound(ref key) if key.is_empty()));
}

#[test]
fn blank_key_is_rejected() {
    let router: Router = Router::new();
    let err = router
        .register_components(&[
            Component::new("ok", fixed("ok")),
            Component::new("  ", fixed("blank")),
        ])
        .unwrap_err();
    assert_eq!(err.error_code(), "invalid_component");
    assert!(router.component_keys().is_empty());
}

#[test]
fn duplicate_key_is_rejected() {
    let router: Router = Router::new();
    router
        .register_components(&[Component::new("ok", fixed("first"))])
        .unwrap();
    let err = router
        .register_components(&[
            Component::new("other", fixed("other")),
            Component::new("ok", fixed("second")),
        ])
        .unwrap_err();
    assert!(matches!(err, RouterError::InvalidComponent { ref key, .. } if key == "ok"));
    assert_eq!(router.component_keys(), ["ok"]);
    assert_eq!(
        router
            .find_and_execute_component(&Interaction::component("ok"))
            .unwrap(),
        "first"
    );
}

struct Toggle;

impl ComponentHandler for Toggle {
    fn handle(&self, interaction: &Interaction) -> HandlerResult {
        match interaction.user_id {
            Some(user) => Ok(format!("toggled by {user}")),
            None => Err("no user on interaction".into()),
        }
    }
}

#[test]
fn struct_handler_and_error_pass_through() {
    let router: Router = Router::new();
    router
        .register_components(&[Component::with_handler("toggle", Arc::new(Toggle))])
        .unwrap();

    let ev = Interaction::component("toggle").with_user(5);
    assert_eq!(
        router.find_and_execute_component(&ev).unwrap(),
        "toggled by 5"
    );

    let err = router
        .find_and_execute_component(&Interaction::component("toggle"))
        .unwrap_err();
    assert!(matches!(err, RouterError::Handler(_)));
    assert_eq!(err.to_string(), "no user on interaction");
}

#[test]
fn one_component_list_serves_several_routers() {
    let components = [
        Component::new("confirm", fixed("confirmed")),
        Component::new("cancel", fixed("cancelled")),
    ];
    let primary: Router = Router::new();
    let secondary: Router = Router::new();
    assert_eq!(primary.register_components(&components).unwrap(), 2);
    assert_eq!(secondary.register_components(&components).unwrap(), 2);

    for router in [&primary, &secondary] {
        assert_eq!(
            router
                .find_and_execute_component(&Interaction::component("confirm"))
                .unwrap(),
            "confirmed"
        );
    }
}
