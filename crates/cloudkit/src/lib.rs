//! # cloudkit
//!
//! Resource resolution and provisioning engine for the Stratus platform.
//!
//! This crate provides the core machinery shared by every resource
//! command in the CLI:
//! - Resolving an ambiguous user-supplied identifier (id or name, with
//!   interactive fallback) into exactly one remote resource
//! - Provisioning new resources by fulfilling an ordered graph of typed
//!   requirements, with user-gated retry on remote failure
//!
//! ## Example
//!
//! ```
//! use cloudkit::api::MockApiClient;
//! use cloudkit::console::{ScriptedConsole, StaticInput};
//! use cloudkit::credentials::StaticCredentials;
//! use cloudkit::{CommandContext, Resource, ResourceKind, Scope, resolver};
//!
//! let api = MockApiClient::new();
//! api.add(ResourceKind::Cache, Resource::new(1, "sessions"));
//! api.add(ResourceKind::Cache, Resource::new(2, "pages"));
//!
//! let input = StaticInput::new(false).with_argument("cache", Some("pages".to_string()));
//! let console = ScriptedConsole::new();
//! let credentials = StaticCredentials::new();
//! let ctx = CommandContext::new(&api, &input, &console, &credentials, Scope::new());
//!
//! let cache = resolver::resolve(&ctx, ResourceKind::Cache, "Which cache cluster?").unwrap();
//! assert_eq!(cache.id, 2);
//! ```
//!
//! ## Design
//!
//! Everything is synchronous and blocking: API calls and prompts block
//! the calling command, and requirement fulfillment is strictly
//! sequential so interactive prompt ordering stays predictable. External
//! capabilities (API, input, output, credentials) are traits on the
//! [`CommandContext`], constructed fresh per command invocation; in-memory
//! doubles for all of them ship with the crate for testing.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod collection;
pub mod console;
pub mod context;
pub mod credentials;
pub mod definition;
pub mod error;
pub mod provisioner;
pub mod requirement;
pub mod resolver;
pub mod types;

pub use collection::{Collection, Identified};
pub use context::CommandContext;
pub use definition::ResourceDefinition;
pub use error::{Error, ErrorCategory, Result};
pub use requirement::{Fulfilled, Requirement};
pub use types::{Resource, ResourceKind, Scope};
