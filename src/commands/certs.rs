use anyhow::Result;
use cloudkit::ResourceKind;
use cloudkit::requirement::Fulfilled;
use serde_json::json;

use crate::blueprints;
use crate::cli::{CertAddArgs, CertsCommand};
use crate::commands::{self, Session};
use crate::ui;

pub fn run(session: &Session, cmd: CertsCommand) -> Result<()> {
    match cmd {
        CertsCommand::List => list(session),
        CertsCommand::Show { certificate } => {
            commands::show(session, ResourceKind::Certificate, certificate, "Which certificate?")
        }
        CertsCommand::Add(args) => add(session, args),
        CertsCommand::Rm { certificate, yes } => commands::remove(
            session,
            ResourceKind::Certificate,
            certificate,
            "Which certificate?",
            yes,
        ),
    }
}

fn list(session: &Session) -> Result<()> {
    let certificates = session.list(ResourceKind::Certificate)?;

    ui::header("Certificates");
    if certificates.is_empty() {
        commands::empty_hint(ResourceKind::Certificate);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = certificates
        .iter()
        .map(|certificate| {
            vec![
                certificate.id.to_string(),
                certificate.name.clone(),
                commands::attr_cell(certificate, "domain"),
                commands::attr_cell(certificate, "provider"),
            ]
        })
        .collect();
    ui::table(&["ID", "NAME", "DOMAIN", "PROVIDER"], &rows);
    Ok(())
}

fn add(session: &Session, args: CertAddArgs) -> Result<()> {
    let input = session.input().with_argument("provider", args.provider);
    let ctx = session.context(&input);

    let mut seed = Fulfilled::new();
    if let Some(domain) = args.domain {
        seed.insert("domain", json!(domain));
    }

    let certificate = cloudkit::provisioner::provision(&ctx, &blueprints::certificate(), seed)?;
    ui::success(&format!(
        "Issued certificate for '{}' (#{})",
        certificate.name, certificate.id
    ));
    Ok(())
}
