//! HTTP implementation of the platform API client.
//!
//! Talks JSON to the platform's REST API over blocking HTTP. All
//! transport and status failures map to [`Error::Remote`], so callers
//! never have to inspect `ureq` types.

use crate::api::ApiClient;
use crate::collection::Collection;
use crate::error::Result;
use crate::requirement::Fulfilled;
use crate::types::{Resource, ResourceKind, Scope};
use serde::Deserialize;
use serde_json::{Map, Value};

/// HTTP client for the platform API.
///
/// # Example
///
/// ```no_run
/// use cloudkit::api::http::HttpApiClient;
/// use cloudkit::api::ApiClient;
/// use cloudkit::{ResourceKind, Scope};
///
/// let client = HttpApiClient::new("https://api.stratus.dev", Some("token".to_string()));
/// let caches = client.list(ResourceKind::Cache, &Scope::new()).unwrap();
/// println!("{} cache clusters", caches.len());
/// ```
pub struct HttpApiClient {
    /// HTTP agent for requests.
    agent: ureq::Agent,
    /// API base URL.
    api_base: String,
    /// Bearer token, if configured.
    token: Option<String>,
}

impl HttpApiClient {
    /// Create a client against the given API base URL.
    #[must_use]
    pub fn new(api_base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Get the current API base URL.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Build the collection URL for a kind.
    fn collection_url(&self, kind: ResourceKind) -> String {
        format!("{}/v1/{}", self.api_base, kind.path())
    }

    /// Build the URL for a single resource.
    fn resource_url(&self, kind: ResourceKind, id: u64) -> String {
        format!("{}/v1/{}/{}", self.api_base, kind.path(), id)
    }

    fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }
}

impl ApiClient for HttpApiClient {
    fn list(&self, kind: ResourceKind, scope: &Scope) -> Result<Collection<Resource>> {
        let mut request = self
            .agent
            .get(&self.collection_url(kind))
            .header("Accept", "application/json");
        if let Some(bearer) = self.bearer() {
            request = request.header("Authorization", &bearer);
        }
        for (key, value) in scope.query_pairs() {
            request = request.query(key, value);
        }

        let listing: Vec<ApiResource> = request.call()?.body_mut().read_json()?;
        Ok(listing.into_iter().map(Into::into).collect())
    }

    fn create(&self, kind: ResourceKind, payload: &Fulfilled) -> Result<Resource> {
        let mut request = self
            .agent
            .post(&self.collection_url(kind))
            .header("Accept", "application/json");
        if let Some(bearer) = self.bearer() {
            request = request.header("Authorization", &bearer);
        }

        let created: ApiResource = request
            .send_json(Value::Object(payload.to_json()))?
            .body_mut()
            .read_json()?;
        Ok(created.into())
    }

    fn delete(&self, kind: ResourceKind, id: u64, scope: &Scope) -> Result<()> {
        let mut request = self
            .agent
            .delete(&self.resource_url(kind, id))
            .header("Accept", "application/json");
        if let Some(bearer) = self.bearer() {
            request = request.header("Authorization", &bearer);
        }
        for (key, value) in scope.query_pairs() {
            request = request.query(key, value);
        }

        request.call()?;
        Ok(())
    }
}

// =============================================================================
// Platform API response types
// =============================================================================

#[derive(Debug, Deserialize)]
struct ApiResource {
    id: u64,
    name: String,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

impl From<ApiResource> for Resource {
    fn from(r: ApiResource) -> Self {
        Self {
            id: r.id,
            name: r.name,
            attributes: r.attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_url() {
        let client = HttpApiClient::new("https://api.stratus.dev", None);
        assert_eq!(
            client.collection_url(ResourceKind::Cache),
            "https://api.stratus.dev/v1/caches"
        );
    }

    #[test]
    fn test_resource_url() {
        let client = HttpApiClient::new("https://api.stratus.dev", None);
        assert_eq!(
            client.resource_url(ResourceKind::Certificate, 12),
            "https://api.stratus.dev/v1/certificates/12"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = HttpApiClient::new("https://api.stratus.dev/", None);
        assert_eq!(client.api_base(), "https://api.stratus.dev");
    }

    #[test]
    fn test_bearer_header_value() {
        let client = HttpApiClient::new("https://api.stratus.dev", Some("abc123".to_string()));
        assert_eq!(client.bearer(), Some("Bearer abc123".to_string()));

        let anonymous = HttpApiClient::new("https://api.stratus.dev", None);
        assert_eq!(anonymous.bearer(), None);
    }

    #[test]
    fn test_api_resource_conversion() {
        let api_resource: ApiResource = serde_json::from_str(
            r#"{"id": 9, "name": "edge", "region": "eu-central", "nodes": 3}"#,
        )
        .unwrap();

        let resource: Resource = api_resource.into();
        assert_eq!(resource.id, 9);
        assert_eq!(resource.name, "edge");
        assert_eq!(resource.attr_str("region"), Some("eu-central"));
        assert_eq!(resource.attr("nodes"), Some(&serde_json::json!(3)));
    }
}
