use anyhow::Result;
use cloudkit::ResourceKind;
use cloudkit::requirement::Fulfilled;
use serde_json::json;

use crate::blueprints;
use crate::cli::{CacheAddArgs, CachesCommand};
use crate::commands::{self, Session};
use crate::ui;

pub fn run(session: &Session, cmd: CachesCommand) -> Result<()> {
    match cmd {
        CachesCommand::List => list(session),
        CachesCommand::Show { cache } => {
            commands::show(session, ResourceKind::Cache, cache, "Which cache cluster?")
        }
        CachesCommand::Add(args) => add(session, args),
        CachesCommand::Rm { cache, yes } => {
            commands::remove(session, ResourceKind::Cache, cache, "Which cache cluster?", yes)
        }
    }
}

fn list(session: &Session) -> Result<()> {
    let caches = session.list(ResourceKind::Cache)?;

    ui::header("Cache Clusters");
    if caches.is_empty() {
        commands::empty_hint(ResourceKind::Cache);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = caches
        .iter()
        .map(|cache| {
            vec![
                cache.id.to_string(),
                cache.name.clone(),
                commands::attr_cell(cache, "engine"),
                commands::attr_cell(cache, "region"),
                commands::attr_cell(cache, "plan"),
            ]
        })
        .collect();
    ui::table(&["ID", "NAME", "ENGINE", "REGION", "PLAN"], &rows);
    Ok(())
}

fn add(session: &Session, args: CacheAddArgs) -> Result<()> {
    // The provider flag goes through the input surface so the resolver
    // can disambiguate an id-or-name token; plain values seed the
    // provisioner directly.
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

    let cache = cloudkit::provisioner::provision(&ctx, &blueprints::cache(), seed)?;
    ui::success(&format!("Created cache cluster '{}' (#{})", cache.name, cache.id));
    Ok(())
}
