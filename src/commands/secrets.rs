use anyhow::Result;
use cloudkit::ResourceKind;
use cloudkit::requirement::Fulfilled;
use serde_json::json;

use crate::blueprints;
use crate::cli::SecretsCommand;
use crate::commands::{self, Session};
use crate::ui;

pub fn run(session: &Session, cmd: SecretsCommand) -> Result<()> {
    match cmd {
        SecretsCommand::List => list(session),
        SecretsCommand::Add { name, value } => add(session, name, value),
        SecretsCommand::Rm { secret, yes } => {
            commands::remove(session, ResourceKind::Secret, secret, "Which secret?", yes)
        }
    }
}

fn list(session: &Session) -> Result<()> {
    let secrets = session.list(ResourceKind::Secret)?;

    ui::header("Secrets");
    if secrets.is_empty() {
        commands::empty_hint(ResourceKind::Secret);
        return Ok(());
    }

    // Values are never listed, only names.
    let rows: Vec<Vec<String>> = secrets
        .iter()
        .map(|secret| vec![secret.id.to_string(), secret.name.clone()])
        .collect();
    ui::table(&["ID", "NAME"], &rows);
    Ok(())
}

fn add(session: &Session, name: Option<String>, value: Option<String>) -> Result<()> {
    let input = session.input();
    let ctx = session.context(&input);

    let mut seed = Fulfilled::new();
    if let Some(name) = name {
        seed.insert("name", json!(name));
    }
    if let Some(value) = value {
        seed.insert("value", json!(value));
    }

    let secret = cloudkit::provisioner::provision(&ctx, &blueprints::secret(), seed)?;
    ui::success(&format!("Stored secret '{}' (#{})", secret.name, secret.id));
    Ok(())
}
