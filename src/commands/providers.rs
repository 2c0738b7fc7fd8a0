use anyhow::Result;
use cloudkit::ResourceKind;
use cloudkit::requirement::Fulfilled;
use serde_json::json;

use crate::blueprints;
use crate::cli::{ProviderAddArgs, ProvidersCommand};
use crate::commands::{self, Session};
use crate::ui;

pub fn run(session: &Session, cmd: ProvidersCommand) -> Result<()> {
    match cmd {
        ProvidersCommand::List => list(session),
        ProvidersCommand::Show { provider } => {
            commands::show(session, ResourceKind::Provider, provider, "Which provider?")
        }
        ProvidersCommand::Add(args) => add(session, args),
        ProvidersCommand::Rm { provider, yes } => {
            commands::remove(session, ResourceKind::Provider, provider, "Which provider?", yes)
        }
    }
}

fn list(session: &Session) -> Result<()> {
    let providers = session.list(ResourceKind::Provider)?;

    ui::header("Providers");
    if providers.is_empty() {
        commands::empty_hint(ResourceKind::Provider);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = providers
        .iter()
        .map(|provider| {
            vec![
                provider.id.to_string(),
                provider.name.clone(),
                commands::attr_cell(provider, "driver"),
                commands::attr_cell(provider, "regions"),
            ]
        })
        .collect();
    ui::table(&["ID", "NAME", "DRIVER", "REGIONS"], &rows);
    Ok(())
}

fn add(session: &Session, args: ProviderAddArgs) -> Result<()> {
    let input = session.input();
    let ctx = session.context(&input);

    let mut seed = Fulfilled::new();
    if let Some(name) = args.name {
        seed.insert("name", json!(name));
    }
    if let Some(driver) = args.driver {
        seed.insert("driver", json!(driver));
    }

    let provider = cloudkit::provisioner::provision(&ctx, &blueprints::provider(), seed)?;
    ui::success(&format!("Linked provider '{}' (#{})", provider.name, provider.id));
    Ok(())
}
