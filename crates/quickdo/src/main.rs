//! CLI entry point for quickdo.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use quickdo_app::{ProjectConfig, TaskService};
use quickdo_store_json::JsonStore;

mod config;
mod tui;

use config::keybindings::{KeyBindingsConfig, load_config, validate_tui_config};

/// One screen of tasks, one JSON snapshot on disk.
#[derive(Parser, Debug)]
#[command(
    name = "quickdo",
    version,
    about = "quickdo: a single-screen task list persisted to one JSON snapshot"
)]
struct Cli {
    /// Snapshot file path (overrides the configured location).
    #[arg(long)]
    storage: Option<PathBuf>,

    /// Config file path (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let Cli { storage, config } = Cli::parse();

    install_tracing();

    let project = ProjectConfig::load(config.as_deref())?;
    let storage_path = project.storage_path(storage.as_deref())?;

    let keybindings = match load_config(config.as_deref())? {
        Some(loaded) => {
            validate_tui_config(&loaded.tui)?;
            loaded.tui.keybindings
        }
        None => KeyBindingsConfig::default(),
    };

    let store = JsonStore::new(storage_path);
    let service = TaskService::new(store);
    tui::run(service, keybindings)
}

fn install_tracing() {
    // EnvFilterに RUST_LOG を渡せる。デフォルトは INFO。
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_without_flags() {
        let cli = Cli::parse_from(["quickdo"]);
        assert!(cli.storage.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_storage_override() {
        let cli = Cli::parse_from(["quickdo", "--storage", "/tmp/tasks.json"]);
        assert_eq!(cli.storage, Some(PathBuf::from("/tmp/tasks.json")));
    }

    #[test]
    fn parse_config_override() {
        let cli = Cli::parse_from(["quickdo", "--config", "custom.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}
