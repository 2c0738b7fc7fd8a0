//! Command implementations.
//!
//! Every resource command follows the same shape: open a [`Session`],
//! build a per-invocation execution context, then resolve or provision
//! through cloudkit and print the result.

pub mod caches;
pub mod certs;
pub mod config;
pub mod databases;
pub mod environments;
pub mod providers;
pub mod secrets;
pub mod teams;

use anyhow::{Result, bail};
use cloudkit::api::ApiClient;
use cloudkit::api::http::HttpApiClient;
use cloudkit::console::{Console, StaticInput};
use cloudkit::credentials::EnvCredentials;
use cloudkit::{Collection, CommandContext, Resource, ResourceKind, Scope, resolver};
use serde_json::Value;

use crate::Context;
use crate::console::TerminalConsole;
use crate::ui;

/// Per-invocation bundle of the CLI's capability implementations.
///
/// One is opened per command run; the execution contexts handed to
/// cloudkit borrow from it.
pub struct Session {
    api: HttpApiClient,
    console: TerminalConsole,
    credentials: EnvCredentials,
    scope: Scope,
    interactive: bool,
}

impl Session {
    /// Open a session from the application context.
    pub fn open(ctx: &Context) -> Self {
        let mut scope = Scope::new();
        if let Some(team) = &ctx.team {
            scope = scope.with_team(team.clone());
        }
        if let Some(project) = &ctx.project {
            scope = scope.with_project(project.clone());
        }

        Self {
            api: HttpApiClient::new(&ctx.config.api_url, ctx.config.token.clone()),
            console: TerminalConsole::new(),
            credentials: EnvCredentials::new("STRATUS_SECRET"),
            scope,
            interactive: !ctx.no_input && console::user_attended(),
        }
    }

    /// List all resources of a kind within the session's scope.
    pub fn list(&self, kind: ResourceKind) -> cloudkit::Result<Collection<Resource>> {
        self.api.list(kind, &self.scope)
    }

    /// The active scope.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Whether prompting is allowed in this session.
    pub fn interactive(&self) -> bool {
        self.interactive
    }

    /// An input surface with no identifier arguments.
    pub fn input(&self) -> StaticInput {
        StaticInput::new(self.interactive)
    }

    /// Build an execution context over the given input surface.
    pub fn context<'a>(&'a self, input: &'a StaticInput) -> CommandContext<'a> {
        CommandContext::new(
            &self.api,
            input,
            &self.console,
            &self.credentials,
            self.scope.clone(),
        )
    }
}

/// Resolve an id-or-name identifier into one resource.
pub fn resolve_identifier(
    session: &Session,
    kind: ResourceKind,
    identifier: Option<String>,
    prompt: &str,
) -> Result<Resource> {
    let input = session.input().with_argument(kind.arg_name(), identifier);
    let ctx = session.context(&input);
    Ok(resolver::resolve(&ctx, kind, prompt)?)
}

/// Shared `show` implementation: resolve, then print id and attributes.
pub fn show(
    session: &Session,
    kind: ResourceKind,
    identifier: Option<String>,
    prompt: &str,
) -> Result<()> {
    let resource = resolve_identifier(session, kind, identifier, prompt)?;

    ui::header(&resource.name);
    ui::kv("ID", &resource.id.to_string());
    for (key, value) in &resource.attributes {
        ui::kv(key, &value_cell(value));
    }
    Ok(())
}

/// Shared `rm` implementation: resolve, confirm, delete.
pub fn remove(
    session: &Session,
    kind: ResourceKind,
    identifier: Option<String>,
    prompt: &str,
    yes: bool,
) -> Result<()> {
    let resource = resolve_identifier(session, kind, identifier, prompt)?;

    if !yes {
        if !session.interactive() {
            bail!(
                "refusing to delete {} '{}' without --yes in a non-interactive session",
                kind.display_name(),
                resource.name
            );
        }
        let confirmed = session.console.confirm(
            &format!("Delete {} '{}' (#{})?", kind.display_name(), resource.name, resource.id),
            false,
        )?;
        if !confirmed {
            ui::dim("Aborted");
            return Ok(());
        }
    }

    session.api.delete(kind, resource.id, session.scope())?;
    ui::success(&format!(
        "Deleted {} '{}' (#{})",
        kind.display_name(),
        resource.name,
        resource.id
    ));
    Ok(())
}

/// Render an attribute value for tables and key-value output.
pub fn value_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_cell)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// Table cell for a resource attribute, `-` when absent.
pub fn attr_cell(resource: &Resource, key: &str) -> String {
    resource.attr(key).map_or_else(|| "-".to_string(), value_cell)
}

/// Hint printed under empty listings.
pub fn empty_hint(kind: ResourceKind) {
    ui::dim(&format!(
        "No {}s yet. Create one with '{}'.",
        kind.display_name(),
        kind.create_command()
    ));
}
