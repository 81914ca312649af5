// cardex - Terminal browser for the Rick and Morty character listing
//
// Pages through a public, paginated character listing, filters the current
// page by name and shows each character as a card with a detail overlay.
//
// Architecture:
// - Listing: HTTP client (reqwest) or in-memory demo source, schema-validated
// - Browser: command-driven state container (page, filter, selection, fetch status)
// - TUI (ratatui): card grid, pager, detail overlay, logs panel
// - Headless: `cardex list` prints one filtered page without the TUI
// - Fetch results flow back to the event loop over an mpsc channel

mod browser;
mod cli;
mod config;
mod headless;
mod listing;
mod logging;
mod theme;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, ConfigFlags};
use config::Config;
use logging::LogBuffer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config management exits before anything else is set up
    if let Some(Commands::Config {
        show,
        reset,
        edit,
        update,
        path,
    }) = cli.command
    {
        return cli::handle_config(ConfigFlags {
            show,
            reset,
            edit,
            update,
            path,
        });
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Extract bundled themes on first run
    theme::ensure_themes_extracted();

    let config = Config::from_env();

    let list_args = match cli.command {
        Some(Commands::List { url, filter, json }) => Some((url, filter, json)),
        _ => None,
    };
    let use_tui = config.enable_tui && list_args.is_none();

    // In TUI mode logs go to the in-memory buffer (prevents garbling the display)
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init_tracing(&config.logging, use_tui, &log_buffer)?;

    let source = listing::create_source(&config).context("Failed to create listing source")?;

    if use_tui {
        return tui::run_tui(config, source, log_buffer).await;
    }

    let (url, filter, json) = list_args.unwrap_or((None, None, false));
    let url = url.unwrap_or_else(|| config.listing.api_url.clone());
    headless::run_list(source, &url, filter.as_deref(), json).await
}
