// CLI module - command-line argument parsing and config handlers
//
// Subcommands:
// - list: fetch one page headlessly and print the filtered view
// - config --show|--path|--reset|--edit|--update: manage the config file
//
// No subcommand runs the TUI.

use crate::config::{Config, VERSION};
use crate::theme::Theme;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;

/// cardex - browse the Rick and Morty character listing in your terminal
#[derive(Parser)]
#[command(name = "cardex")]
#[command(version = VERSION)]
#[command(about = "Terminal browser for the Rick and Morty character listing", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch one page and print it (no TUI)
    List {
        /// Page link to read (default: configured api_url)
        #[arg(long)]
        url: Option<String>,

        /// Only print characters whose name contains this text (case-insensitive)
        #[arg(long, short)]
        filter: Option<String>,

        /// Print the filtered records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Update config with new defaults (preserves user values)
        #[arg(long)]
        update: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Flags of the `config` subcommand
pub struct ConfigFlags {
    pub show: bool,
    pub reset: bool,
    pub edit: bool,
    pub update: bool,
    pub path: bool,
}

pub fn handle_config(flags: ConfigFlags) -> Result<()> {
    if flags.path {
        handle_config_path()
    } else if flags.show {
        handle_config_show();
        Ok(())
    } else if flags.reset {
        handle_config_reset()
    } else if flags.edit {
        handle_config_edit()
    } else if flags.update {
        handle_config_update()
    } else {
        println!("Usage: cardex config [--show|--reset|--edit|--update|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --edit    Open config file in $EDITOR");
        println!("  --update  Update config with new defaults (preserves user values)");
        println!("  --path    Show config file path");
        Ok(())
    }
}

fn config_path() -> Result<std::path::PathBuf> {
    Config::config_path().context("Could not determine config path (no home directory)")
}

fn handle_config_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());
    println!();
    println!("# Runtime flags");
    println!("# demo_mode = {}  (CARDEX_DEMO)", config.demo_mode);
    println!("# enable_tui = {}  (CARDEX_NO_TUI)", config.enable_tui);
    println!("# themes: {}", Theme::list_available().join(", "));

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = config_path()?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn handle_config_edit() -> Result<()> {
    let path = config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor).arg(&path).status().with_context(|| {
        format!(
            "Failed to launch editor '{}' (set $EDITOR to your preferred editor)",
            editor
        )
    })?;

    if !status.success() {
        bail!("Editor exited with status: {}", status);
    }
    Ok(())
}

fn handle_config_update() -> Result<()> {
    let path = config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
        return Ok(());
    }

    // Re-render from file values only, so env overrides don't get persisted
    let updated = Config::from_file_only().to_toml();

    let backup_path = path.with_extension("toml.bak");
    match std::fs::copy(&path, &backup_path) {
        Ok(_) => println!("Backup created: {}", backup_path.display()),
        Err(e) => eprintln!("Warning: Could not create backup: {}", e),
    }

    std::fs::write(&path, updated)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config updated with latest structure: {}", path.display());
    println!("Your values have been preserved.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_flags() {
        let cli = Cli::parse_from(["cardex", "list", "--filter", "rick", "--json"]);
        match cli.command {
            Some(Commands::List { url, filter, json }) => {
                assert!(url.is_none());
                assert_eq!(filter.as_deref(), Some("rick"));
                assert!(json);
            }
            _ => panic!("expected list subcommand"),
        }
    }

    #[test]
    fn test_no_subcommand_runs_tui() {
        let cli = Cli::parse_from(["cardex"]);
        assert!(cli.command.is_none());
    }
}
