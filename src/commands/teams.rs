use anyhow::Result;
use cloudkit::ResourceKind;
use cloudkit::requirement::Fulfilled;
use serde_json::json;

use crate::blueprints;
use crate::cli::TeamsCommand;
use crate::commands::{self, Session};
use crate::ui;

pub fn run(session: &Session, cmd: TeamsCommand) -> Result<()> {
    match cmd {
        TeamsCommand::List => list(session),
        TeamsCommand::Show { team } => {
            commands::show(session, ResourceKind::Team, team, "Which team?")
        }
        TeamsCommand::Add { name } => add(session, name),
    }
}

fn list(session: &Session) -> Result<()> {
    let teams = session.list(ResourceKind::Team)?;

    ui::header("Teams");
    if teams.is_empty() {
        commands::empty_hint(ResourceKind::Team);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = teams
        .iter()
        .map(|team| vec![team.id.to_string(), team.name.clone()])
        .collect();
    ui::table(&["ID", "NAME"], &rows);
    Ok(())
}

fn add(session: &Session, name: Option<String>) -> Result<()> {
    let input = session.input();
    let ctx = session.context(&input);

    let mut seed = Fulfilled::new();
    if let Some(name) = name {
        seed.insert("name", json!(name));
    }

    let team = cloudkit::provisioner::provision(&ctx, &blueprints::team(), seed)?;
    ui::success(&format!("Created team '{}' (#{})", team.name, team.id));
    Ok(())
}
