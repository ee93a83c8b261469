//! # CLI Layer
//!
//! The entry point of the binary. It is the **only** place that:
//! - Parses process arguments
//! - Installs the tracing subscriber
//! - Resolves the configuration directory
//! - Dispatches one-shot commands or hands over to a session
//!
//! Logging goes to stderr so rendered output on stdout stays clean. The filter is
//! read from `BILLZ_LOG` (e.g. `BILLZ_LOG=billzapp=debug`), defaulting to `warn`,
//! or `debug` with `--verbose`.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use billzapp::api::BillzApi;
use billzapp::commands::config::ConfigAction;
use billzapp::commands::CmdResult;
use clap::Parser;
use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

use super::render::{render_fields, render_key_values, render_messages};
use super::repl::{self, Session};
use super::setup::{Cli, Commands, ConfigCommands, SessionCommand};

pub const CONFIG_DIR_ENV: &str = "BILLZ_CONFIG_DIR";
pub const LOG_ENV: &str = "BILLZ_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let use_color = if cli.no_color { Some(false) } else { None };
    let config_dir = config_dir()?;
    tracing::debug!(dir = %config_dir.display(), "using config directory");

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => repl::run(BillzApi::open(&config_dir)?, use_color),
        Commands::Demo { count } => handle_demo(BillzApi::open(&config_dir)?, count, use_color),
        Commands::Fields => {
            let api = BillzApi::open(&config_dir)?;
            let result = api.fields()?;
            print!("{}", render_fields(&result.fields, use_color));
            Ok(())
        }
        Commands::Config { action } => {
            let mut api = BillzApi::open(&config_dir)?;
            handle_config(&mut api, action, use_color)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "billz", "billz")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow!("Could not determine config dir (set {})", CONFIG_DIR_ENV))
}

/// Generates a sample burst in a fresh session, then prints the cards and the table.
fn handle_demo(mut api: BillzApi, count: Option<usize>, use_color: Option<bool>) -> Result<()> {
    api.set_demo_mode(true);
    let mut session = Session::new(api, std::io::stdout(), use_color);
    session.sample_burst(count)?;
    session.print_summary()?;
    session.execute(SessionCommand::List, None)?;
    Ok(())
}

fn handle_config(
    api: &mut BillzApi,
    action: Option<ConfigCommands>,
    use_color: Option<bool>,
) -> Result<()> {
    let action = match action {
        None => ConfigAction::ShowAll,
        Some(ConfigCommands::Get { key }) => ConfigAction::ShowKey(key),
        Some(ConfigCommands::Set { key, value }) => ConfigAction::Set(key, value),
        Some(ConfigCommands::Unset { key }) => ConfigAction::Unset(key),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = api.config_action(action)?;
    print_config_result(&result, show_all, use_color);

    if result.has_errors() {
        return Err(anyhow!("config command failed"));
    }
    Ok(())
}

fn print_config_result(result: &CmdResult, show_all: bool, use_color: Option<bool>) {
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_key_values(&config.entries(), use_color));
        }
    }
    print!("{}", render_messages(&result.messages, use_color));
}
