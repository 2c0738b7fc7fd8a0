use anyhow::Result;
use cloudkit::ResourceKind;
use cloudkit::requirement::Fulfilled;
use serde_json::json;

use crate::blueprints;
use crate::cli::{EnvironmentAddArgs, EnvironmentsCommand};
use crate::commands::{self, Session};
use crate::ui;

pub fn run(session: &Session, cmd: EnvironmentsCommand) -> Result<()> {
    match cmd {
        EnvironmentsCommand::List => list(session),
        EnvironmentsCommand::Show { environment } => {
            commands::show(session, ResourceKind::Environment, environment, "Which environment?")
        }
        EnvironmentsCommand::Add(args) => add(session, args),
        EnvironmentsCommand::Rm { environment, yes } => commands::remove(
            session,
            ResourceKind::Environment,
            environment,
            "Which environment?",
            yes,
        ),
    }
}

fn list(session: &Session) -> Result<()> {
    let environments = session.list(ResourceKind::Environment)?;

    ui::header("Environments");
    if environments.is_empty() {
        commands::empty_hint(ResourceKind::Environment);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = environments
        .iter()
        .map(|environment| {
            vec![
                environment.id.to_string(),
                environment.name.clone(),
                commands::attr_cell(environment, "tier"),
            ]
        })
        .collect();
    ui::table(&["ID", "NAME", "TIER"], &rows);
    Ok(())
}

fn add(session: &Session, args: EnvironmentAddArgs) -> Result<()> {
    let input = session.input();
    let ctx = session.context(&input);

    let mut seed = Fulfilled::new();
    if let Some(name) = args.name {
        seed.insert("name", json!(name));
    }
    if let Some(tier) = args.tier {
        seed.insert("tier", json!(tier));
    }

    let environment = cloudkit::provisioner::provision(&ctx, &blueprints::environment(), seed)?;
    ui::success(&format!(
        "Created environment '{}' (#{})",
        environment.name, environment.id
    ));
    Ok(())
}
