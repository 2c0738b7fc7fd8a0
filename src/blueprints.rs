//! Provisioning definitions for each resource kind.
//!
//! Each blueprint declares, in fulfillment order, the inputs a resource
//! needs before the platform can create it. Order matters: the region
//! requirement reads the provider resolved one step earlier.

use cloudkit::api::ApiClient;
use cloudkit::console::{Console, Input};
use cloudkit::requirement::{Choice, Derived, FromCredentials, Prompt, ResolveExisting};
use cloudkit::{Error, ResourceDefinition, ResourceKind};
use serde_json::Value;

/// Clouds a provider can be linked against.
pub const PROVIDER_DRIVERS: &[&str] = &["aws", "gcp", "azure", "hetzner"];

/// Cache engines the platform offers.
pub const CACHE_ENGINES: &[&str] = &["redis", "valkey", "memcached"];

/// Database engines the platform offers.
pub const DATABASE_ENGINES: &[&str] = &["postgres", "mysql"];

/// Plans shared by caches and databases.
pub const PLANS: &[&str] = &["dev", "standard", "performance"];

/// Environment tiers.
pub const ENVIRONMENT_TIERS: &[&str] = &["development", "staging", "production"];

/// Regions offered when a provider doesn't advertise its own.
pub const DEFAULT_REGIONS: &[&str] = &["us-east", "us-west", "eu-central", "ap-southeast"];

pub fn provider() -> ResourceDefinition {
    ResourceDefinition::new(ResourceKind::Provider)
        .require(Prompt::new("name", "Provider name"))
        .require(Choice::new(
            "driver",
            "Which cloud does this provider run on?",
            PROVIDER_DRIVERS,
        ))
        .require(FromCredentials::new("api_token", "provider-api-token"))
}

pub fn team() -> ResourceDefinition {
    ResourceDefinition::new(ResourceKind::Team)
        .require(Prompt::new("name", "Team name"))
}

pub fn environment() -> ResourceDefinition {
    ResourceDefinition::new(ResourceKind::Environment)
        .require(Prompt::new("name", "Environment name"))
        .require(Choice::new("tier", "Which tier?", ENVIRONMENT_TIERS))
}

pub fn cache() -> ResourceDefinition {
    ResourceDefinition::new(ResourceKind::Cache)
        .require(Prompt::new("name", "Cache cluster name"))
        .require(ResolveExisting::new(
            "provider",
            ResourceKind::Provider,
            "Which provider should host the cluster?",
        ))
        .require(region())
        .require(Choice::new("engine", "Which cache engine?", CACHE_ENGINES))
        .require(Choice::new("plan", "Which plan?", PLANS))
}

pub fn certificate() -> ResourceDefinition {
    ResourceDefinition::new(ResourceKind::Certificate)
        .require(Prompt::new("domain", "Domain the certificate covers"))
        .require(Derived::new("name", &["domain"], |_ctx, fulfilled| {
            // Certificates are named after the domain they cover.
            let domain = fulfilled.get_str("domain").unwrap_or_default();
            Ok(Value::String(domain.to_string()))
        }))
        .require(ResolveExisting::new(
            "provider",
            ResourceKind::Provider,
            "Which provider should issue the certificate?",
        ))
}

pub fn database() -> ResourceDefinition {
    ResourceDefinition::new(ResourceKind::Database)
        .require(Prompt::new("name", "Database name"))
        .require(ResolveExisting::new(
            "provider",
            ResourceKind::Provider,
            "Which provider should host the database?",
        ))
        .require(region())
        .require(Choice::new("engine", "Which database engine?", DATABASE_ENGINES))
        .require(Choice::new("plan", "Which plan?", PLANS))
}

pub fn secret() -> ResourceDefinition {
    ResourceDefinition::new(ResourceKind::Secret)
        .require(Prompt::new("name", "Secret name"))
        .require(Prompt::new("value", "Secret value"))
}

/// Region requirement shared by caches and databases.
///
/// Reads the already-resolved provider, offers the regions that provider
/// advertises (falling back to the platform defaults), and asks the user
/// to pick one. Non-interactive runs must pass `--region`.
fn region() -> Derived {
    Derived::new("region", &["provider"], |ctx, fulfilled| {
        let provider_id = fulfilled.get_id("provider").ok_or_else(|| Error::Definition {
            message: "requirement 'region' expects 'provider' to hold a resource id".to_string(),
        })?;

        let providers = ctx.api().list(ResourceKind::Provider, ctx.scope())?;
        let regions: Vec<String> = providers
            .first_where_id(provider_id)
            .and_then(|provider| provider.attr("regions"))
            .and_then(Value::as_array)
            .map(|values| {
                values
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .filter(|regions: &Vec<String>| !regions.is_empty())
            .unwrap_or_else(|| DEFAULT_REGIONS.iter().map(|s| (*s).to_string()).collect());

        if !ctx.input().is_interactive() {
            return Err(Error::MissingArgument {
                name: "region".to_string(),
            });
        }
        let index = ctx.console().choose("Which region?", &regions)?;
        Ok(Value::String(regions[index].clone()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudkit::api::MockApiClient;
    use cloudkit::console::{ScriptedConsole, StaticInput};
    use cloudkit::credentials::StaticCredentials;
    use cloudkit::requirement::{Fulfilled, Requirement};
    use cloudkit::{CommandContext, Resource, Scope, provisioner};
    use serde_json::json;

    #[test]
    fn test_all_blueprints_validate() {
        for definition in [
            provider(),
            team(),
            environment(),
            cache(),
            certificate(),
            database(),
            secret(),
        ] {
            definition.validate().unwrap();
        }
    }

    #[test]
    fn test_cache_requirement_order() {
        let blueprint = cache();
        let names: Vec<&str> = blueprint
            .requirements()
            .iter()
            .map(|requirement| requirement.name())
            .collect();
        assert_eq!(names, vec!["name", "provider", "region", "engine", "plan"]);
    }

    #[test]
    fn test_region_offers_provider_advertised_regions() {
        let api = MockApiClient::new();
        api.add(
            ResourceKind::Provider,
            Resource::new(1, "aws-prod").with_attr("regions", json!(["eu-west", "eu-north"])),
        );
        let input = StaticInput::new(true);
        let console = ScriptedConsole::new();
        console.push_choice(1);
        let credentials = StaticCredentials::new();
        let ctx = CommandContext::new(&api, &input, &console, &credentials, Scope::new());

        let fulfilled = Fulfilled::new().with("provider", json!(1));
        let value = region().fulfill(&ctx, &fulfilled);
        assert_eq!(value.unwrap(), json!("eu-north"));
    }

    #[test]
    fn test_region_falls_back_to_default_regions() {
        let api = MockApiClient::new();
        api.add(ResourceKind::Provider, Resource::new(1, "bare"));
        let input = StaticInput::new(true);
        let console = ScriptedConsole::new();
        console.push_choice(0);
        let credentials = StaticCredentials::new();
        let ctx = CommandContext::new(&api, &input, &console, &credentials, Scope::new());

        let fulfilled = Fulfilled::new().with("provider", json!(1));
        let value = region().fulfill(&ctx, &fulfilled);
        assert_eq!(value.unwrap(), json!(DEFAULT_REGIONS[0]));
    }

    #[test]
    fn test_region_non_interactive_requires_flag() {
        let api = MockApiClient::new();
        api.add(ResourceKind::Provider, Resource::new(1, "aws-prod"));
        let input = StaticInput::new(false);
        let console = ScriptedConsole::new();
        let credentials = StaticCredentials::new();
        let ctx = CommandContext::new(&api, &input, &console, &credentials, Scope::new());

        let fulfilled = Fulfilled::new().with("provider", json!(1));
        let err = region().fulfill(&ctx, &fulfilled).unwrap_err();
        assert!(matches!(err, Error::MissingArgument { name } if name == "region"));
    }

    #[test]
    fn test_cache_provisioning_end_to_end_with_seeds() {
        let api = MockApiClient::new();
        api.add(
            ResourceKind::Provider,
            Resource::new(1, "aws-prod").with_attr("regions", json!(["eu-west"])),
        );
        let input =
            StaticInput::new(false).with_argument("provider", Some("aws-prod".to_string()));
        let console = ScriptedConsole::new();
        let credentials = StaticCredentials::new();
        let ctx = CommandContext::new(&api, &input, &console, &credentials, Scope::new());

        let seed = Fulfilled::new()
            .with("name", json!("sessions"))
            .with("region", json!("eu-west"))
            .with("engine", json!("redis"))
            .with("plan", json!("standard"));

        let created = provisioner::provision(&ctx, &cache(), seed).unwrap();
        assert_eq!(created.name, "sessions");
        assert_eq!(created.attr("provider"), Some(&json!(1)));
        assert_eq!(created.attr_str("engine"), Some("redis"));
    }

    #[test]
    fn test_certificate_name_derived_from_domain() {
        let api = MockApiClient::new();
        api.add(ResourceKind::Provider, Resource::new(1, "aws-prod"));
        let input =
            StaticInput::new(false).with_argument("provider", Some("1".to_string()));
        let console = ScriptedConsole::new();
        let credentials = StaticCredentials::new();
        let ctx = CommandContext::new(&api, &input, &console, &credentials, Scope::new());

        let seed = Fulfilled::new().with("domain", json!("shop.example.com"));
        let created = provisioner::provision(&ctx, &certificate(), seed).unwrap();
        assert_eq!(created.name, "shop.example.com");
        assert_eq!(created.attr_str("domain"), Some("shop.example.com"));
    }
}
