mod blueprints;
mod cli;
mod commands;
mod config;
mod console;
mod ui;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Command};
use commands::Session;
use config::Config;
use std::io;
use std::process::ExitCode;

/// Global context for the application
pub struct Context {
    pub config: Config,
    pub team: Option<String>,
    pub project: Option<String>,
    pub no_input: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error(&format!("{:#}", err));
            if let Some(platform_err) = err.downcast_ref::<cloudkit::Error>() {
                ui::dim(platform_err.category().advice());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    let ctx = Context {
        // Flags (and their env fallbacks) override the config file.
        team: cli.team.or_else(|| config.team.clone()),
        project: cli.project.or_else(|| config.project.clone()),
        config,
        no_input: cli.no_input,
    };

    match cli.command {
        Command::Providers(cmd) => commands::providers::run(&Session::open(&ctx), cmd),
        Command::Teams(cmd) => commands::teams::run(&Session::open(&ctx), cmd),
        Command::Environments(cmd) => commands::environments::run(&Session::open(&ctx), cmd),
        Command::Caches(cmd) => commands::caches::run(&Session::open(&ctx), cmd),
        Command::Certs(cmd) => commands::certs::run(&Session::open(&ctx), cmd),
        Command::Databases(cmd) => commands::databases::run(&Session::open(&ctx), cmd),
        Command::Secrets(cmd) => commands::secrets::run(&Session::open(&ctx), cmd),
        Command::Config(cmd) => commands::config::run(&ctx.config, cmd),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "stratus", &mut io::stdout());
            Ok(())
        }
    }
}
