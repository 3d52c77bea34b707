//! Order Board - Toast POS kitchen display server
//!
//! # Usage
//!
//! ```bash
//! # Serve the board (reads .env if present)
//! cargo run --release
//!
//! # Serve on another address, dashboard from ./public
//! ./order-board --addr 127.0.0.1:8080 --static-dir public
//!
//! # List the location's menu groups to build the allow-list
//! ./order-board menu-groups
//! ./order-board menu-groups --find 7dd2960b-c8b6-4adc-8aa3-bf02af7c5ef0
//! ```
//!
//! # Environment Variables
//!
//! - `TOAST_CLIENT_ID`, `TOAST_CLIENT_SECRET`: machine-client credentials (required)
//! - `TOAST_LOCATION_ID`: restaurant external ID (required)
//! - `TOAST_API_HOSTNAME`: API base URL (required)
//! - `ORDER_BOARD_*`: optional overrides, see `config`
//! - `RUST_LOG`: Logging level (default: info)

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;

use order_board::api::{create_app, BoardState};
use order_board::config::{ENV_SERVER_ADDR, ENV_STATIC_DIR};
use order_board::{AppConfig, BoardCoordinator, SystemClock, ToastClient};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "order-board")]
#[command(about = "Toast order board: ready and in-progress orders for a kitchen display")]
#[command(version)]
struct CliArgs {
    /// Override the server address (default: "0.0.0.0:3000")
    #[arg(short, long, env = ENV_SERVER_ADDR)]
    addr: Option<String>,

    /// Directory holding the dashboard HTML/JS/CSS (default: current directory)
    #[arg(long, env = ENV_STATIC_DIR, value_name = "DIR")]
    static_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<SubCommand>,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// List the location's menu groups and their cross-location identifiers
    MenuGroups {
        /// Report the group with this GUID
        #[arg(long, value_name = "GUID")]
        find: Option<String>,
    },
}

// ============================================================================
// Menu Group Listing
// ============================================================================

async fn run_menu_groups(client: &ToastClient, config: &AppConfig, find: Option<&str>) -> Result<()> {
    let groups = client
        .list_menu_groups()
        .await
        .with_context(|| format!("Failed to fetch menu groups from {}", client.base_url()))?;

    println!();
    println!("  Menu groups ({}):", groups.len());
    println!();

    let mut found = None;
    for group in &groups {
        let name = group.name.as_deref().unwrap_or("Unnamed");
        let guid = group.guid.as_deref().unwrap_or("N/A");
        let multi_id = group.multi_location_id.as_deref().unwrap_or("N/A");
        let marker = if config.menu_groups.contains(multi_id) { "*" } else { " " };
        println!("  {marker} {name} | GUID: {guid} | multiLocationId: {multi_id}");

        if find.is_some_and(|target| target == guid) {
            found = Some(group);
        }
    }

    println!();
    println!("  * = on the board's allow-list");

    if let Some(target) = find {
        println!();
        match found {
            Some(group) => {
                println!("  Match found:");
                println!("    Name: {}", group.name.as_deref().unwrap_or("Unnamed"));
                println!("    GUID: {target}");
                println!(
                    "    multiLocationId: {}",
                    group.multi_location_id.as_deref().unwrap_or("N/A")
                );
            }
            None => println!("  No menu group with GUID {target}"),
        }
    }
    println!();

    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    let mut config = AppConfig::from_env().context("Invalid configuration")?;
    if let Some(addr) = args.addr {
        config.server_addr = addr;
    }
    if let Some(dir) = args.static_dir {
        config.static_dir = dir;
    }

    let clock = Arc::new(SystemClock);
    let client = ToastClient::new(config.toast.clone(), clock.clone())
        .context("Failed to build Toast HTTP client")?;

    if let Some(SubCommand::MenuGroups { find }) = &args.command {
        return run_menu_groups(&client, &config, find.as_deref()).await;
    }

    info!(
        toast = %client.base_url(),
        location = %config.toast.location_id,
        menu_groups = config.menu_groups.len(),
        lookback_mins = config.lookback.num_minutes(),
        "Order board configured"
    );

    let coordinator = BoardCoordinator::new(
        Arc::new(client),
        config.menu_groups.clone(),
        clock,
        config.lookback,
    );
    let app = create_app(BoardState::new(coordinator), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.server_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.server_addr))?;
    info!(
        "✓ Order board running at http://{} (dashboard: {})",
        config.server_addr,
        config.static_dir.display()
    );

    // Graceful shutdown via Ctrl+C
    let cancel_token = CancellationToken::new();
    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("🛑 Received Ctrl+C, initiating shutdown...");
        shutdown_token.cancel();
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel_token.cancelled().await;
        })
        .await
        .context("HTTP server error")?;

    info!("✓ Order board shutdown complete");
    Ok(())
}
