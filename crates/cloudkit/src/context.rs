//! Per-command execution context.
//!
//! A [`CommandContext`] bundles the API client, input and output surfaces,
//! credentials source, and the active scope for one command invocation.
//! It is constructed fresh per command and passed by reference into
//! requirements, the resolver, and the provisioner; nothing about it is
//! global or shared across invocations.

use crate::api::ApiClient;
use crate::console::{Console, Input};
use crate::credentials::CredentialsSource;
use crate::error::Result;
use crate::resolver;
use crate::types::{Resource, ResourceKind, Scope};
use std::cell::RefCell;

/// Request-scoped bundle of the capabilities the core needs.
pub struct CommandContext<'a> {
    api: &'a dyn ApiClient,
    input: &'a dyn Input,
    console: &'a dyn Console,
    credentials: &'a dyn CredentialsSource,
    scope: Scope,
    // The one within-run memoization: the active team is looked up at most
    // once per command invocation.
    team: RefCell<Option<Resource>>,
}

impl<'a> CommandContext<'a> {
    /// Create a context for one command invocation.
    #[must_use]
    pub fn new(
        api: &'a dyn ApiClient,
        input: &'a dyn Input,
        console: &'a dyn Console,
        credentials: &'a dyn CredentialsSource,
        scope: Scope,
    ) -> Self {
        Self {
            api,
            input,
            console,
            credentials,
            scope,
            team: RefCell::new(None),
        }
    }

    /// The API client.
    #[must_use]
    pub fn api(&self) -> &dyn ApiClient {
        self.api
    }

    /// The input surface.
    #[must_use]
    pub fn input(&self) -> &dyn Input {
        self.input
    }

    /// The output surface.
    #[must_use]
    pub fn console(&self) -> &dyn Console {
        self.console
    }

    /// The credentials source.
    #[must_use]
    pub fn credentials(&self) -> &dyn CredentialsSource {
        self.credentials
    }

    /// The active team/project scope.
    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Resolve the active team, memoized for the life of this context.
    ///
    /// The scope's team token (from config or `--team`) is resolved
    /// against the teams listing; without a token an interactive session
    /// prompts for a choice. Subsequent calls return the cached result
    /// without another API round trip.
    pub fn active_team(&self) -> Result<Resource> {
        if let Some(team) = self.team.borrow().as_ref() {
            return Ok(team.clone());
        }

        let team = resolver::resolve_token(
            self,
            ResourceKind::Team,
            self.scope.team.as_deref(),
            "Which team?",
        )?;
        *self.team.borrow_mut() = Some(team.clone());
        Ok(team)
    }
}
