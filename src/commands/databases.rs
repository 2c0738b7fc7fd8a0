use anyhow::Result;
use cloudkit::ResourceKind;
use cloudkit::requirement::Fulfilled;
use serde_json::json;

use crate::blueprints;
use crate::cli::{DatabaseAddArgs, DatabasesCommand};
use crate::commands::{self, Session};
use crate::ui;

pub fn run(session: &Session, cmd: DatabasesCommand) -> Result<()> {
    match cmd {
        DatabasesCommand::List => list(session),
        DatabasesCommand::Show { database } => {
            commands::show(session, ResourceKind::Database, database, "Which database?")
        }
        DatabasesCommand::Add(args) => add(session, args),
        DatabasesCommand::Rm { database, yes } => {
            commands::remove(session, ResourceKind::Database, database, "Which database?", yes)
        }
    }
}

fn list(session: &Session) -> Result<()> {
    let databases = session.list(ResourceKind::Database)?;

    ui::header("Databases");
    if databases.is_empty() {
        commands::empty_hint(ResourceKind::Database);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = databases
        .iter()
        .map(|database| {
            vec![
                database.id.to_string(),
                database.name.clone(),
                commands::attr_cell(database, "engine"),
                commands::attr_cell(database, "region"),
                commands::attr_cell(database, "plan"),
            ]
        })
        .collect();
    ui::table(&["ID", "NAME", "ENGINE", "REGION", "PLAN"], &rows);
    Ok(())
}

fn add(session: &Session, args: DatabaseAddArgs) -> Result<()> {
    let input = session.input().with_argument("provider", args.provider);
    let ctx = session.context(&input);

    let mut seed = Fulfilled::new();
    if let Some(name) = args.name {
        seed.insert("name", json!(name));
    }
    if let Some(region) = args.region {
        seed.insert("region", json!(region));
    }
    if let Some(engine) = args.engine {
        seed.insert("engine", json!(engine));
    }
    if let Some(plan) = args.plan {
        seed.insert("plan", json!(plan));
    }

    let database = cloudkit::provisioner::provision(&ctx, &blueprints::database(), seed)?;
    ui::success(&format!("Created database '{}' (#{})", database.name, database.id));
    Ok(())
}
