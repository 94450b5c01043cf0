//! Demonstration command set for the replay tool.

use slashroute::{CommandDef, Component, HandlerResult, OptionMap};
use slashroute_proto::Interaction;

const DOC_TOPICS: &[&str] = &["commands", "components", "config", "errors", "routing"];

pub fn commands() -> Vec<CommandDef> {
    vec![
        CommandDef::command("ping").execute(|_, _| Ok("pong".to_string())),
        CommandDef::command("echo")
            .execute(|_, opts| Ok(opts.str("text").unwrap_or_default().to_string()))
            .child(CommandDef::command("text")),
        CommandDef::command("user")
            .child(CommandDef::subcommand("ban").execute(ban))
            .child(CommandDef::subcommand("info").execute(user_info)),
        CommandDef::command("role").child(
            CommandDef::group("admin")
                .child(CommandDef::subcommand("add").execute(|_, opts| role_change("added", opts)))
                .child(
                    CommandDef::subcommand("remove")
                        .execute(|_, opts| role_change("removed", opts)),
                ),
        ),
        CommandDef::command("docs").child(
            CommandDef::subcommand("search")
                .execute(|_, opts| {
                    Ok(format!("docs: {}", opts.str("topic").unwrap_or("index")))
                })
                .autocomplete(suggest_topics),
        ),
    ]
}

pub fn components() -> Vec<Component> {
    vec![
        Component::new("vote", |ev: &Interaction| {
            let choice = ev
                .component_data()
                .and_then(|d| d.custom_id.split_once(':'))
                .map_or("?", |(_, choice)| choice);
            Ok(format!("vote recorded: {choice}"))
        }),
        Component::new("confirm", |_: &Interaction| Ok("confirmed".to_string())),
    ]
}

fn ban(ev: &Interaction, opts: &OptionMap<'_>) -> HandlerResult {
    let target = opts
        .snowflake("target")
        .ok_or("missing required option 'target'")?;
    let reason = opts.str("reason").unwrap_or("no reason given");
    let days = opts.i64("days").unwrap_or(0);

    match ev.guild_id {
        Some(guild) => Ok(format!(
            "banned <@{target}> from {guild} ({reason}, {days}d of messages removed)"
        )),
        None => Err("bans only work inside a guild".into()),
    }
}

fn user_info(ev: &Interaction, opts: &OptionMap<'_>) -> HandlerResult {
    let target = opts.snowflake("target").or(ev.user_id);
    Ok(match target {
        Some(id) => format!("user <@{id}>"),
        None => "unknown user".to_string(),
    })
}

fn role_change(verb: &str, opts: &OptionMap<'_>) -> HandlerResult {
    let role = opts.snowflake("role").ok_or("missing required option 'role'")?;
    Ok(format!("{verb} role <@&{role}>"))
}

fn suggest_topics(_: &Interaction, opts: &OptionMap<'_>) -> HandlerResult {
    let typed = opts
        .focused()
        .and_then(|opt| opt.value.as_ref())
        .and_then(|v| v.as_str())
        .unwrap_or_default();

    let matches: Vec<&str> = DOC_TOPICS
        .iter()
        .copied()
        .filter(|topic| topic.starts_with(typed))
        .collect();
    Ok(matches.join(","))
}
