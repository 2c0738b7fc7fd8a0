//! Core types for the platform resource model.
//!
//! This module contains the fundamental data structures used throughout
//! the cloudkit crate: the resource kinds the platform manages, the
//! immutable resource snapshot returned by the API, and the team/project
//! scope threaded into listing calls.

use crate::collection::Identified;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Resource kinds managed through the platform API.
///
/// Each kind carries the static metadata the client needs: its API path
/// segment, display names, the argument name commands accept for it, and
/// the command to suggest when none exist yet.
///
/// # Example
///
/// ```
/// use cloudkit::ResourceKind;
///
/// let kind = ResourceKind::Cache;
/// assert_eq!(kind.path(), "caches");
/// assert_eq!(kind.display_name(), "cache cluster");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Cloud provider account linked to the platform.
    Provider,
    /// Team owning projects and resources.
    Team,
    /// Deployment environment within a project.
    Environment,
    /// Managed cache cluster.
    Cache,
    /// TLS certificate.
    Certificate,
    /// Managed database.
    Database,
    /// Named secret attached to a project.
    Secret,
}

impl ResourceKind {
    /// Get the API path segment for this kind.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Provider => "providers",
            Self::Team => "teams",
            Self::Environment => "environments",
            Self::Cache => "caches",
            Self::Certificate => "certificates",
            Self::Database => "databases",
            Self::Secret => "secrets",
        }
    }

    /// Get the singular, human-readable name used in messages.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Provider => "provider",
            Self::Team => "team",
            Self::Environment => "environment",
            Self::Cache => "cache cluster",
            Self::Certificate => "certificate",
            Self::Database => "database",
            Self::Secret => "secret",
        }
    }

    /// Get the argument name commands accept for identifying this kind.
    #[must_use]
    pub fn arg_name(&self) -> &'static str {
        match self {
            Self::Provider => "provider",
            Self::Team => "team",
            Self::Environment => "environment",
            Self::Cache => "cache",
            Self::Certificate => "certificate",
            Self::Database => "database",
            Self::Secret => "secret",
        }
    }

    /// Get the CLI command that creates a resource of this kind.
    ///
    /// Used as the hint in [`Error::EmptyCollection`](crate::Error::EmptyCollection).
    #[must_use]
    pub fn create_command(&self) -> &'static str {
        match self {
            Self::Provider => "stratus providers add",
            Self::Team => "stratus teams add",
            Self::Environment => "stratus environments add",
            Self::Cache => "stratus caches add",
            Self::Certificate => "stratus certs add",
            Self::Database => "stratus databases add",
            Self::Secret => "stratus secrets add",
        }
    }

    /// Get all resource kinds.
    #[must_use]
    pub fn all() -> &'static [ResourceKind] {
        &[
            ResourceKind::Provider,
            ResourceKind::Team,
            ResourceKind::Environment,
            ResourceKind::Cache,
            ResourceKind::Certificate,
            ResourceKind::Database,
            ResourceKind::Secret,
        ]
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A remote resource snapshot.
///
/// Resources are immutable value snapshots fetched per request; state
/// changes happen through new API calls and re-fetches, never by mutating
/// a snapshot in place. The server guarantees `id` uniqueness; `name` is
/// human-facing and NOT guaranteed unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Stable, server-assigned numeric id.
    pub id: u64,
    /// Human-facing name.
    pub name: String,
    /// Type-specific fields, as returned by the API.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Resource {
    /// Create a resource with no extra attributes.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            attributes: Map::new(),
        }
    }

    /// Attach an attribute (builder style).
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Get an attribute by key.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Get a string attribute by key.
    #[must_use]
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }
}

impl Identified for Resource {
    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Team/project scope applied to listing calls.
///
/// Carried on the execution context so requirements and the resolver can
/// scope their remote lookups without reaching for global state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    /// Active team (id or name token), if any.
    pub team: Option<String>,
    /// Active project (id or name token), if any.
    pub project: Option<String>,
}

impl Scope {
    /// Create an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the active team (builder style).
    #[must_use]
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// Set the active project (builder style).
    #[must_use]
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Query parameters for listing calls.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if let Some(team) = &self.team {
            pairs.push(("team", team.as_str()));
        }
        if let Some(project) = &self.project {
            pairs.push(("project", project.as_str()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_metadata() {
        assert_eq!(ResourceKind::Provider.path(), "providers");
        assert_eq!(ResourceKind::Cache.display_name(), "cache cluster");
        assert_eq!(ResourceKind::Certificate.arg_name(), "certificate");
        assert_eq!(ResourceKind::Database.create_command(), "stratus databases add");
    }

    #[test]
    fn test_kind_all_is_exhaustive() {
        let all = ResourceKind::all();
        assert_eq!(all.len(), 7);
        assert!(all.contains(&ResourceKind::Secret));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ResourceKind::Cache.to_string(), "cache cluster");
    }

    #[test]
    fn test_kind_serde_lowercase() {
        let json = serde_json::to_string(&ResourceKind::Provider).unwrap();
        assert_eq!(json, "\"provider\"");
    }

    #[test]
    fn test_resource_attributes() {
        let resource = Resource::new(7, "primary")
            .with_attr("region", json!("eu-central"))
            .with_attr("nodes", json!(3));

        assert_eq!(resource.attr_str("region"), Some("eu-central"));
        assert_eq!(resource.attr("nodes"), Some(&json!(3)));
        assert_eq!(resource.attr("missing"), None);
    }

    #[test]
    fn test_resource_deserialize_flattens_attributes() {
        let resource: Resource =
            serde_json::from_str(r#"{"id": 3, "name": "edge", "region": "us-east"}"#).unwrap();
        assert_eq!(resource.id, 3);
        assert_eq!(resource.name, "edge");
        assert_eq!(resource.attr_str("region"), Some("us-east"));
    }

    #[test]
    fn test_scope_query_pairs() {
        let scope = Scope::new().with_team("platform").with_project("webshop");
        assert_eq!(
            scope.query_pairs(),
            vec![("team", "platform"), ("project", "webshop")]
        );
        assert!(Scope::new().query_pairs().is_empty());
    }
}
