use anyhow::Result;

use crate::cli::ConfigCommand;
use crate::config::Config;
use crate::ui;

pub fn run(active: &Config, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => show(active),
        ConfigCommand::Init => init(),
        ConfigCommand::Path => {
            println!("{}", Config::path()?.display());
            Ok(())
        }
    }
}

fn show(config: &Config) -> Result<()> {
    ui::header("Configuration");
    ui::kv("API URL", &config.api_url);
    ui::kv("Token", &mask(config.token.as_deref()));
    ui::kv("Team", config.team.as_deref().unwrap_or("-"));
    ui::kv("Project", config.project.as_deref().unwrap_or("-"));
    ui::dim(&format!("File: {}", Config::path()?.display()));
    Ok(())
}

fn init() -> Result<()> {
    let path = Config::path()?;
    if path.exists() {
        ui::warn(&format!("Config already exists at {}", path.display()));
        return Ok(());
    }

    Config::default().save()?;
    ui::success(&format!("Wrote default config to {}", path.display()));
    ui::dim("Set your API token with STRATUS_TOKEN or by editing the file");
    Ok(())
}

/// Mask a token for display, keeping a short prefix
fn mask(token: Option<&str>) -> String {
    match token {
        None => "-".to_string(),
        Some(token) if token.len() <= 4 => "****".to_string(),
        Some(token) => format!("{}****", &token[..4]),
    }
}
