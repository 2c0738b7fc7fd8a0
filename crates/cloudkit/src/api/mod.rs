//! API client trait and implementations.
//!
//! This module provides the [`ApiClient`] trait and implementations for
//! talking to the platform. The primary implementation is
//! [`http::HttpApiClient`]; tests use [`MockApiClient`] without network
//! access.
//!
//! ```
//! use cloudkit::api::{ApiClient, MockApiClient};
//! use cloudkit::{Resource, ResourceKind, Scope};
//!
//! let mock = MockApiClient::new();
//! mock.add(ResourceKind::Provider, Resource::new(1, "aws-prod"));
//!
//! let providers = mock.list(ResourceKind::Provider, &Scope::new()).unwrap();
//! assert_eq!(providers.len(), 1);
//! ```

pub mod http;

use crate::collection::Collection;
use crate::error::{Error, Result};
use crate::requirement::Fulfilled;
use crate::types::{Resource, ResourceKind, Scope};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Client for the platform's remote API.
///
/// Every call is synchronous and blocking; failures surface as
/// [`Error::Remote`], the only error kind eligible for the provisioning
/// retry prompt.
pub trait ApiClient {
    /// List all resources of a kind within a scope.
    ///
    /// The returned collection preserves server response order.
    fn list(&self, kind: ResourceKind, scope: &Scope) -> Result<Collection<Resource>>;

    /// Create a resource from fulfilled requirement values.
    fn create(&self, kind: ResourceKind, payload: &Fulfilled) -> Result<Resource>;

    /// Delete a resource by id.
    fn delete(&self, kind: ResourceKind, id: u64, scope: &Scope) -> Result<()>;
}

/// Mock API client for testing without network access.
///
/// Stores resources in memory, assigns ids on create, and can be scripted
/// to fail a number of upcoming create calls with a remote error.
#[derive(Debug, Clone, Default)]
pub struct MockApiClient {
    resources: Arc<Mutex<HashMap<ResourceKind, Vec<Resource>>>>,
    create_failures: Arc<Mutex<u32>>,
    create_calls: Arc<Mutex<u32>>,
    next_id: Arc<Mutex<u64>>,
}

impl MockApiClient {
    /// Create a new empty mock client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource to a kind's listing.
    pub fn add(&self, kind: ResourceKind, resource: Resource) {
        let mut resources = self.resources.lock().unwrap();
        resources.entry(kind).or_default().push(resource);
    }

    /// Replace a kind's listing.
    pub fn set(&self, kind: ResourceKind, listing: Vec<Resource>) {
        let mut resources = self.resources.lock().unwrap();
        resources.insert(kind, listing);
    }

    /// Make the next `count` create calls fail with a remote error.
    pub fn fail_next_creates(&self, count: u32) {
        *self.create_failures.lock().unwrap() = count;
    }

    /// How many times `create` has been called.
    #[must_use]
    pub fn create_calls(&self) -> u32 {
        *self.create_calls.lock().unwrap()
    }
}

impl ApiClient for MockApiClient {
    fn list(&self, kind: ResourceKind, _scope: &Scope) -> Result<Collection<Resource>> {
        let resources = self.resources.lock().unwrap();
        Ok(Collection::new(
            resources.get(&kind).cloned().unwrap_or_default(),
        ))
    }

    fn create(&self, kind: ResourceKind, payload: &Fulfilled) -> Result<Resource> {
        *self.create_calls.lock().unwrap() += 1;

        let mut failures = self.create_failures.lock().unwrap();
        if *failures > 0 {
            *failures -= 1;
            return Err(Error::remote("service temporarily unavailable", Some(503)));
        }
        drop(failures);

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let id = *next_id;
        drop(next_id);

        let name = payload
            .get_str("name")
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}-{}", kind.arg_name(), id));

        let mut resource = Resource::new(id, name);
        for (key, value) in payload.iter() {
            if key != "name" {
                resource.attributes.insert(key.to_string(), value.clone());
            }
        }

        self.add(kind, resource.clone());
        Ok(resource)
    }

    fn delete(&self, kind: ResourceKind, id: u64, _scope: &Scope) -> Result<()> {
        let mut resources = self.resources.lock().unwrap();
        let listing = resources.entry(kind).or_default();
        let before = listing.len();
        listing.retain(|resource| resource.id != id);
        if listing.len() == before {
            return Err(Error::NotFound {
                kind,
                token: id.to_string(),
            });
        }
        Ok(())
    }
}
