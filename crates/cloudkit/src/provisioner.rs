//! Requirement fulfillment and resource creation with retry.
//!
//! One provisioning attempt fulfills every requirement not covered by the
//! caller's seed, strictly sequentially in declared order, then issues the
//! creation call. A remote failure is reported and, in an interactive
//! session, the user may retry: the next attempt starts again from the
//! original seed, so values fulfilled during the failed attempt are
//! redone while caller-supplied values are preserved. Any non-remote
//! error propagates immediately without a retry prompt.
//!
//! The retry loop is unbounded; it ends only when creation succeeds or
//! the user declines. Each iteration allocates nothing but the
//! per-attempt value map.

use crate::console::{Console, Input};
use crate::context::CommandContext;
use crate::definition::ResourceDefinition;
use crate::error::{Error, Result};
use crate::requirement::Fulfilled;
use crate::types::Resource;

/// Fulfill a definition's requirements and create the resource.
///
/// `seed` holds pre-fulfilled values supplied by the caller (for example
/// from command-line options); requirements whose names appear in it are
/// never fulfilled, on any attempt.
///
/// # Errors
///
/// Propagates requirement and validation errors as-is. A remote creation
/// failure becomes [`Error::Cancelled`] once the user declines to retry,
/// or immediately in a non-interactive session.
pub fn provision(
    ctx: &CommandContext<'_>,
    definition: &ResourceDefinition,
    seed: Fulfilled,
) -> Result<Resource> {
    definition.validate()?;

    loop {
        let mut fulfilled = seed.clone();
        for requirement in definition.requirements() {
            if fulfilled.contains(requirement.name()) {
                continue;
            }
            let value = requirement.fulfill(ctx, &fulfilled)?;
            fulfilled.insert(requirement.name().to_string(), value);
        }

        match definition.provision(ctx, &fulfilled) {
            Ok(resource) => return Ok(resource),
            Err(err) if err.is_retryable() => {
                ctx.console().error(&err.to_string());
                let retry = ctx.input().is_interactive()
                    && ctx.console().confirm(
                        &format!("Retry creating the {}?", definition.display_name()),
                        true,
                    )?;
                if !retry {
                    return Err(Error::Cancelled {
                        resource: definition.display_name().to_string(),
                    });
                }
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApiClient;
    use crate::console::{ScriptedConsole, StaticInput};
    use crate::credentials::StaticCredentials;
    use crate::requirement::{Derived, Fulfilled, Requirement};
    use crate::types::{ResourceKind, Scope};
    use serde_json::{Value, json};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Requirement that records every fulfillment and returns a fixed value.
    struct Recorded {
        name: String,
        value: Value,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Recorded {
        fn new(name: &str, value: Value, log: &Rc<RefCell<Vec<String>>>) -> Self {
            Self {
                name: name.to_string(),
                value,
                log: Rc::clone(log),
            }
        }
    }

    impl Requirement for Recorded {
        fn name(&self) -> &str {
            &self.name
        }

        fn fulfill(&self, _ctx: &CommandContext<'_>, _fulfilled: &Fulfilled) -> Result<Value> {
            self.log.borrow_mut().push(self.name.clone());
            Ok(self.value.clone())
        }
    }

    struct Fixture {
        api: MockApiClient,
        console: ScriptedConsole,
        credentials: StaticCredentials,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                api: MockApiClient::new(),
                console: ScriptedConsole::new(),
                credentials: StaticCredentials::new(),
            }
        }

        fn context<'a>(&'a self, input: &'a StaticInput) -> CommandContext<'a> {
            CommandContext::new(&self.api, input, &self.console, &self.credentials, Scope::new())
        }
    }

    fn two_step_definition(log: &Rc<RefCell<Vec<String>>>) -> ResourceDefinition {
        ResourceDefinition::new(ResourceKind::Cache)
            .require(Recorded::new("a", json!("value-a"), log))
            .require(Recorded::new("b", json!("value-b"), log))
    }

    #[test]
    fn test_requirements_fulfilled_in_declared_order() {
        let fixture = Fixture::new();
        let input = StaticInput::new(false);
        let log = Rc::new(RefCell::new(Vec::new()));

        let resource = provision(
            &fixture.context(&input),
            &two_step_definition(&log),
            Fulfilled::new(),
        )
        .unwrap();

        assert_eq!(*log.borrow(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(resource.attr_str("a"), Some("value-a"));
        assert_eq!(resource.attr_str("b"), Some("value-b"));
    }

    #[test]
    fn test_seeded_requirement_is_never_fulfilled() {
        let fixture = Fixture::new();
        let input = StaticInput::new(false);
        let log = Rc::new(RefCell::new(Vec::new()));

        let seed = Fulfilled::new().with("a", json!("seeded"));
        let resource = provision(&fixture.context(&input), &two_step_definition(&log), seed)
            .unwrap();

        assert_eq!(*log.borrow(), vec!["b".to_string()]);
        assert_eq!(resource.attr_str("a"), Some("seeded"));
    }

    #[test]
    fn test_later_requirement_sees_earlier_value() {
        let fixture = Fixture::new();
        let input = StaticInput::new(false);

        let definition = ResourceDefinition::new(ResourceKind::Database)
            .require(Derived::new("name", &[], |_, _| Ok(json!("users"))))
            .require(Derived::new("slug", &["name"], |_, fulfilled| {
                Ok(json!(format!("db-{}", fulfilled.get_str("name").unwrap())))
            }));

        let resource = provision(&fixture.context(&input), &definition, Fulfilled::new()).unwrap();
        assert_eq!(resource.attr_str("slug"), Some("db-users"));
    }

    #[test]
    fn test_remote_failure_retry_refulfills_and_creates_again() {
        let fixture = Fixture::new();
        fixture.api.fail_next_creates(1);
        fixture.console.push_confirm(true);
        let input = StaticInput::new(true);
        let log = Rc::new(RefCell::new(Vec::new()));

        let resource = provision(
            &fixture.context(&input),
            &two_step_definition(&log),
            Fulfilled::new(),
        )
        .unwrap();

        // Both requirements were redone on the second attempt.
        assert_eq!(*log.borrow(), vec!["a", "b", "a", "b"]);
        assert_eq!(fixture.api.create_calls(), 2);
        assert_eq!(resource.attr_str("a"), Some("value-a"));
        assert_eq!(fixture.console.errors().len(), 1);
    }

    #[test]
    fn test_remote_failure_retry_preserves_seed() {
        let fixture = Fixture::new();
        fixture.api.fail_next_creates(1);
        fixture.console.push_confirm(true);
        let input = StaticInput::new(true);
        let log = Rc::new(RefCell::new(Vec::new()));

        let seed = Fulfilled::new().with("a", json!("seeded"));
        let resource = provision(&fixture.context(&input), &two_step_definition(&log), seed)
            .unwrap();

        // "a" stays seeded on every attempt, "b" is redone.
        assert_eq!(*log.borrow(), vec!["b", "b"]);
        assert_eq!(resource.attr_str("a"), Some("seeded"));
    }

    #[test]
    fn test_remote_failure_decline_cancels_without_second_create() {
        let fixture = Fixture::new();
        fixture.api.fail_next_creates(1);
        fixture.console.push_confirm(false);
        let input = StaticInput::new(true);
        let log = Rc::new(RefCell::new(Vec::new()));

        let err = provision(
            &fixture.context(&input),
            &two_step_definition(&log),
            Fulfilled::new(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::Cancelled { .. }));
        assert_eq!(fixture.api.create_calls(), 1);
    }

    #[test]
    fn test_remote_failure_non_interactive_cancels_without_prompt() {
        let fixture = Fixture::new();
        fixture.api.fail_next_creates(1);
        // No confirmation scripted: a prompt would fail the test.
        let input = StaticInput::new(false);
        let log = Rc::new(RefCell::new(Vec::new()));

        let err = provision(
            &fixture.context(&input),
            &two_step_definition(&log),
            Fulfilled::new(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::Cancelled { .. }));
        assert_eq!(fixture.api.create_calls(), 1);
        assert_eq!(fixture.console.errors().len(), 1);
    }

    #[test]
    fn test_two_remote_failures_two_confirmations() {
        let fixture = Fixture::new();
        fixture.api.fail_next_creates(2);
        fixture.console.push_confirm(true);
        fixture.console.push_confirm(true);
        let input = StaticInput::new(true);
        let log = Rc::new(RefCell::new(Vec::new()));

        let resource = provision(
            &fixture.context(&input),
            &two_step_definition(&log),
            Fulfilled::new(),
        )
        .unwrap();

        assert_eq!(fixture.api.create_calls(), 3);
        assert_eq!(resource.id, 1);
    }

    #[test]
    fn test_requirement_error_propagates_without_retry_prompt() {
        let fixture = Fixture::new();
        let input = StaticInput::new(true);

        let definition = ResourceDefinition::new(ResourceKind::Cache).require(Derived::new(
            "region",
            &[],
            |_, _| {
                Err(Error::Credentials {
                    key: "aws-token".to_string(),
                })
            },
        ));

        let err = provision(&fixture.context(&input), &definition, Fulfilled::new()).unwrap_err();
        assert!(matches!(err, Error::Credentials { .. }));
        assert_eq!(fixture.api.create_calls(), 0);
    }

    #[test]
    fn test_invalid_definition_rejected_before_fulfillment() {
        let fixture = Fixture::new();
        let input = StaticInput::new(true);
        let log = Rc::new(RefCell::new(Vec::new()));

        let definition = ResourceDefinition::new(ResourceKind::Cache)
            .require(Derived::new("region", &["provider"], |_, _| Ok(json!("eu"))))
            .require(Recorded::new("provider", json!(1), &log));

        let err = provision(&fixture.context(&input), &definition, Fulfilled::new()).unwrap_err();
        assert!(matches!(err, Error::Definition { .. }));
        assert!(log.borrow().is_empty());
    }
}
