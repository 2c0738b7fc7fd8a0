//! Per-resource-type provisioning descriptors.
//!
//! A [`ResourceDefinition`] is the static description of how to create a
//! resource of one kind: an ordered list of requirements and the creation
//! call that turns their fulfilled values into a resource. The list is an
//! explicit `Vec` rather than a map so declaration order IS fulfillment
//! order, and [`validate`](ResourceDefinition::validate) checks that every
//! declared dependency precedes its dependent.

use crate::api::ApiClient;
use crate::context::CommandContext;
use crate::error::{Error, Result};
use crate::requirement::{Fulfilled, Requirement};
use crate::types::{Resource, ResourceKind};

/// Static descriptor for provisioning one resource kind.
pub struct ResourceDefinition {
    kind: ResourceKind,
    display_name: String,
    requirements: Vec<Box<dyn Requirement>>,
}

impl ResourceDefinition {
    /// Create a definition for `kind` with no requirements yet.
    #[must_use]
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            display_name: kind.display_name().to_string(),
            requirements: Vec::new(),
        }
    }

    /// Override the display name used in messages (builder style).
    #[must_use]
    pub fn display_name_override(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Append a requirement (builder style). Declaration order is
    /// fulfillment order.
    #[must_use]
    pub fn require(mut self, requirement: impl Requirement + 'static) -> Self {
        self.requirements.push(Box::new(requirement));
        self
    }

    /// The kind this definition provisions.
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Human-readable resource name for error messages.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The requirements, in declaration order.
    #[must_use]
    pub fn requirements(&self) -> &[Box<dyn Requirement>] {
        &self.requirements
    }

    /// Check the requirement graph.
    ///
    /// Rejects duplicate requirement names and dependencies on names not
    /// declared earlier in the list, turning the ordering assumption into
    /// a structural guarantee.
    pub fn validate(&self) -> Result<()> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.requirements.len());
        for requirement in &self.requirements {
            let name = requirement.name();
            if seen.contains(&name) {
                return Err(Error::Definition {
                    message: format!("duplicate requirement '{}'", name),
                });
            }
            for dependency in requirement.depends_on() {
                if !seen.contains(&dependency.as_str()) {
                    return Err(Error::Definition {
                        message: format!(
                            "requirement '{}' depends on '{}', which is not declared before it",
                            name, dependency
                        ),
                    });
                }
            }
            seen.push(name);
        }
        Ok(())
    }

    /// Issue the creation call with the complete fulfilled map.
    pub fn provision(&self, ctx: &CommandContext<'_>, fulfilled: &Fulfilled) -> Result<Resource> {
        ctx.api().create(self.kind, fulfilled)
    }
}
