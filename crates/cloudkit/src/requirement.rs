//! Requirements: declared inputs needed before a resource can be created.
//!
//! A requirement is a named slot with a fulfillment strategy. Fulfillment
//! runs strictly sequentially in declared order, and each requirement sees
//! the values fulfilled before it, so requirements form dependency chains
//! (a region choice list derived from the provider picked one step
//! earlier). Dependencies are declared explicitly via
//! [`Requirement::depends_on`] and checked by
//! [`ResourceDefinition::validate`](crate::ResourceDefinition::validate).

use crate::console::{Console, Input};
use crate::context::CommandContext;
use crate::credentials::CredentialsSource;
use crate::error::{Error, Result};
use crate::resolver;
use crate::types::ResourceKind;
use serde_json::{Map, Value};

/// Insertion-ordered map of fulfilled requirement values.
///
/// Order is the declaration order of the requirements that produced the
/// values, so later requirements (and the creation payload) see a stable
/// view.
#[derive(Debug, Clone, Default)]
pub struct Fulfilled {
    entries: Vec<(String, Value)>,
}

impl Fulfilled {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fulfilled values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been fulfilled yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `name` has been fulfilled.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Get a fulfilled value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Get a fulfilled string value by name.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Get a fulfilled numeric id by name.
    #[must_use]
    pub fn get_id(&self, name: &str) -> Option<u64> {
        self.get(name).and_then(Value::as_u64)
    }

    /// Set a value, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        self.entries.retain(|(key, _)| *key != name);
        self.entries.push((name, value));
    }

    /// Set a value (builder style), for seeding from command options.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.insert(name, value);
        self
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// The map as a JSON object, for the creation payload.
    #[must_use]
    pub fn to_json(&self) -> Map<String, Value> {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

/// A declared input needed before a resource can be provisioned.
pub trait Requirement {
    /// The requirement's name, which keys its fulfilled value.
    fn name(&self) -> &str;

    /// Names of requirements this one reads from the fulfilled map.
    ///
    /// Every dependency must be declared earlier in the definition's
    /// requirement list.
    fn depends_on(&self) -> &[String] {
        &[]
    }

    /// Produce this requirement's value.
    ///
    /// Has access to the execution context (for remote lookups and
    /// prompts) and the values fulfilled so far.
    fn fulfill(&self, ctx: &CommandContext<'_>, fulfilled: &Fulfilled) -> Result<Value>;
}

/// Free-text prompt requirement.
///
/// Non-interactive sessions fail with [`Error::MissingArgument`] unless
/// the value was seeded by the caller.
pub struct Prompt {
    name: String,
    prompt: String,
    default: Option<String>,
}

impl Prompt {
    /// Create a prompt requirement.
    #[must_use]
    pub fn new(name: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
            default: None,
        }
    }

    /// Set a default answer (builder style).
    #[must_use]
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

impl Requirement for Prompt {
    fn name(&self) -> &str {
        &self.name
    }

    fn fulfill(&self, ctx: &CommandContext<'_>, _fulfilled: &Fulfilled) -> Result<Value> {
        if !ctx.input().is_interactive() {
            return Err(Error::MissingArgument {
                name: self.name.clone(),
            });
        }
        let answer = ctx.console().prompt_line(&self.prompt, self.default.as_deref())?;
        Ok(Value::String(answer))
    }
}

/// Fixed-choice prompt requirement.
pub struct Choice {
    name: String,
    prompt: String,
    options: Vec<String>,
}

impl Choice {
    /// Create a choice requirement over a fixed option list.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        prompt: impl Into<String>,
        options: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
            options: options.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl Requirement for Choice {
    fn name(&self) -> &str {
        &self.name
    }

    fn fulfill(&self, ctx: &CommandContext<'_>, _fulfilled: &Fulfilled) -> Result<Value> {
        if !ctx.input().is_interactive() {
            return Err(Error::MissingArgument {
                name: self.name.clone(),
            });
        }
        let index = ctx.console().choose(&self.prompt, &self.options)?;
        Ok(Value::String(self.options[index].clone()))
    }
}

/// Requirement fulfilled by resolving an existing resource.
///
/// Wraps the resolver: reads the kind's argument from the input surface,
/// falls back to an interactive choice, and stores the resolved id.
pub struct ResolveExisting {
    name: String,
    kind: ResourceKind,
    prompt: String,
}

impl ResolveExisting {
    /// Create a resolve requirement for `kind`.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ResourceKind, prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            prompt: prompt.into(),
        }
    }
}

impl Requirement for ResolveExisting {
    fn name(&self) -> &str {
        &self.name
    }

    fn fulfill(&self, ctx: &CommandContext<'_>, _fulfilled: &Fulfilled) -> Result<Value> {
        let resource = resolver::resolve(ctx, self.kind, &self.prompt)?;
        Ok(Value::from(resource.id))
    }
}

/// Fulfillment function for a [`Derived`] requirement.
pub type DeriveFn = Box<dyn Fn(&CommandContext<'_>, &Fulfilled) -> Result<Value>>;

/// Requirement derived from previously fulfilled values.
///
/// The closure receives the execution context and the growing fulfilled
/// map; declared dependencies are guaranteed to be present when it runs.
pub struct Derived {
    name: String,
    depends_on: Vec<String>,
    derive: DeriveFn,
}

impl Derived {
    /// Create a derived requirement.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        depends_on: &[&str],
        derive: impl Fn(&CommandContext<'_>, &Fulfilled) -> Result<Value> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            depends_on: depends_on.iter().map(|s| (*s).to_string()).collect(),
            derive: Box::new(derive),
        }
    }
}

impl Requirement for Derived {
    fn name(&self) -> &str {
        &self.name
    }

    fn depends_on(&self) -> &[String] {
        &self.depends_on
    }

    fn fulfill(&self, ctx: &CommandContext<'_>, fulfilled: &Fulfilled) -> Result<Value> {
        (self.derive)(ctx, fulfilled)
    }
}

/// Requirement fulfilled from the credentials source.
pub struct FromCredentials {
    name: String,
    key: String,
}

impl FromCredentials {
    /// Create a credentials requirement reading `key`.
    #[must_use]
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
        }
    }
}

impl Requirement for FromCredentials {
    fn name(&self) -> &str {
        &self.name
    }

    fn fulfill(&self, ctx: &CommandContext<'_>, _fulfilled: &Fulfilled) -> Result<Value> {
        let secret = ctx.credentials().secret(&self.key)?;
        Ok(Value::String(secret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApiClient;
    use crate::console::{ScriptedConsole, StaticInput};
    use crate::credentials::StaticCredentials;
    use crate::types::Scope;
    use serde_json::json;

    #[test]
    fn test_fulfilled_insertion_order() {
        let mut fulfilled = Fulfilled::new();
        fulfilled.insert("provider", json!(1));
        fulfilled.insert("region", json!("eu-central"));

        let names: Vec<&str> = fulfilled.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["provider", "region"]);
        assert_eq!(fulfilled.get_id("provider"), Some(1));
        assert_eq!(fulfilled.get_str("region"), Some("eu-central"));
    }

    #[test]
    fn test_fulfilled_insert_replaces() {
        let fulfilled = Fulfilled::new()
            .with("name", json!("old"))
            .with("name", json!("new"));
        assert_eq!(fulfilled.len(), 1);
        assert_eq!(fulfilled.get_str("name"), Some("new"));
    }

    #[test]
    fn test_fulfilled_to_json() {
        let fulfilled = Fulfilled::new().with("name", json!("edge"));
        let payload = fulfilled.to_json();
        assert_eq!(payload.get("name"), Some(&json!("edge")));
    }

    #[test]
    fn test_prompt_requirement_non_interactive() {
        let api = MockApiClient::new();
        let input = StaticInput::new(false);
        let console = ScriptedConsole::new();
        let credentials = StaticCredentials::new();
        let ctx = CommandContext::new(&api, &input, &console, &credentials, Scope::new());

        let requirement = Prompt::new("name", "Name?");
        let err = requirement.fulfill(&ctx, &Fulfilled::new()).unwrap_err();
        assert!(matches!(err, Error::MissingArgument { name } if name == "name"));
    }

    #[test]
    fn test_prompt_requirement_interactive() {
        let api = MockApiClient::new();
        let input = StaticInput::new(true);
        let console = ScriptedConsole::new();
        console.push_line("edge-cache");
        let credentials = StaticCredentials::new();
        let ctx = CommandContext::new(&api, &input, &console, &credentials, Scope::new());

        let value = Prompt::new("name", "Name?").fulfill(&ctx, &Fulfilled::new()).unwrap();
        assert_eq!(value, json!("edge-cache"));
    }

    #[test]
    fn test_choice_requirement() {
        let api = MockApiClient::new();
        let input = StaticInput::new(true);
        let console = ScriptedConsole::new();
        console.push_choice(1);
        let credentials = StaticCredentials::new();
        let ctx = CommandContext::new(&api, &input, &console, &credentials, Scope::new());

        let requirement = Choice::new("engine", "Engine?", &["redis", "valkey"]);
        assert_eq!(requirement.fulfill(&ctx, &Fulfilled::new()).unwrap(), json!("valkey"));
    }

    #[test]
    fn test_derived_requirement_sees_dependencies() {
        let api = MockApiClient::new();
        let input = StaticInput::new(false);
        let console = ScriptedConsole::new();
        let credentials = StaticCredentials::new();
        let ctx = CommandContext::new(&api, &input, &console, &credentials, Scope::new());

        let requirement = Derived::new("slug", &["name"], |_ctx, fulfilled| {
            let name = fulfilled.get_str("name").unwrap_or_default();
            Ok(Value::String(name.to_lowercase().replace(' ', "-")))
        });
        assert_eq!(requirement.depends_on(), &["name".to_string()]);

        let fulfilled = Fulfilled::new().with("name", json!("Edge Cache"));
        assert_eq!(requirement.fulfill(&ctx, &fulfilled).unwrap(), json!("edge-cache"));
    }

    #[test]
    fn test_credentials_requirement() {
        let api = MockApiClient::new();
        let input = StaticInput::new(false);
        let console = ScriptedConsole::new();
        let credentials = StaticCredentials::new().with_secret("aws-token", "abc123");
        let ctx = CommandContext::new(&api, &input, &console, &credentials, Scope::new());

        let requirement = FromCredentials::new("token", "aws-token");
        assert_eq!(requirement.fulfill(&ctx, &Fulfilled::new()).unwrap(), json!("abc123"));

        let missing = FromCredentials::new("token", "gcp-token");
        let err = missing.fulfill(&ctx, &Fulfilled::new()).unwrap_err();
        assert!(matches!(err, Error::Credentials { .. }));
    }
}
