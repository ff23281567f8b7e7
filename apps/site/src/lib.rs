//! # SwiftConnect Site Library
//!
//! Host for the SwiftConnect Logistics website forms. Holds the state the
//! page would otherwise keep in the DOM, runs the fixed delays, and answers
//! commands over a JSON-lines console.
//!
//! ## Module Organization
//! ```text
//! swiftconnect_site_lib/
//! ├── lib.rs              ◄─── You are here (startup & console loop)
//! ├── console.rs          ◄─── JSON-lines command protocol
//! ├── state/
//! │   ├── mod.rs          ◄─── State type exports, SiteState registry
//! │   ├── notification.rs ◄─── Single notification slot + expiry timer
//! │   ├── tracking.rs     ◄─── Tracking result blocks + lookup timer
//! │   ├── buttons.rs      ◄─── Submit buttons + re-enable timer
//! │   ├── sources.rs      ◄─── Clock and entropy
//! │   └── config.rs       ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs          ◄─── Command exports
//! │   ├── form.rs         ◄─── Form submission
//! │   ├── pricing.rs      ◄─── Live price preview
//! │   ├── notification.rs ◄─── Notification slot commands
//! │   ├── tracking.rs     ◄─── Tracking blocks, buttons, placeholder
//! │   └── config.rs       ◄─── Configuration retrieval
//! └── error.rs            ◄─── API error type for commands
//! ```

pub mod commands;
pub mod console;
pub mod error;
pub mod state;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use state::SiteState;

/// Runs the console until stdin closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Host Startup                                      │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,swiftconnect=debug; RUST_LOG overrides              │
/// │                                                                         │
/// │  2. Initialize State Objects ─────────────────────────────────────────► │
/// │     • ConfigState from SWIFTCONNECT_* variables                         │
/// │     • SourcesState: wall clock + thread RNG                             │
/// │     • Booking button registered with its idle label                    │
/// │                                                                         │
/// │  3. Console Loop ─────────────────────────────────────────────────────► │
/// │     • One JSON command per stdin line                                   │
/// │     • One JSON response per stdout line                                 │
/// │     • Timers keep running on the runtime between lines                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> std::io::Result<()> {
    init_tracing();

    info!("Starting SwiftConnect site host");

    let state = SiteState::from_env();
    info!(
        company = %state.config.company_name,
        booking_form = %state.config.booking_form_id,
        "State initialized"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        debug!(bytes = line.len(), "command line received");

        let response = console::handle_line(&state, &line);
        stdout.write_all(response.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=swiftconnect=trace` - Show trace for swiftconnect crates only
/// - Default: `info,swiftconnect=debug`
///
/// Logs go to stderr; stdout carries only responses.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,swiftconnect=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
