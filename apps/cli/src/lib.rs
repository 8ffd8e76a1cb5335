//! # shopcart CLI Library
//!
//! Hosts one shopping session: reads commands from an input stream, applies
//! them to the session cart and writes the resulting view.
//!
//! ## Module Organization
//! ```text
//! shopcart_cli/
//! ├── lib.rs          ◄─── You are here (logging setup & session loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Session-owned cart
//! │   └── config.rs   ◄─── Currency display and output format
//! ├── commands/
//! │   ├── mod.rs      ◄─── Line parsing and dispatch
//! │   ├── catalog.rs  ◄─── list_products
//! │   └── cart.rs     ◄─── Cart manipulation commands
//! ├── view.rs         ◄─── Text / JSON rendering
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Session Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  start ──► print catalog ──► print cart                                │
//! │              │                                                          │
//! │              ▼                                                          │
//! │  ┌──► read line ── EOF / quit ──────────────────────────► summary ──►  │
//! │  │      │                                                               │
//! │  │      ▼                                                               │
//! │  │   parse_command ── error ──► print error ──┐                         │
//! │  │      │                                     │                         │
//! │  │      ▼                                     │                         │
//! │  │   execute ── error ──► print error ────────┤                         │
//! │  │      │                                     │                         │
//! │  │      ▼                                     │                         │
//! │  │   print response                           │                         │
//! │  └──────┴─────────────────────────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod view;

use std::io::{self, BufRead, Write};

use chrono::{DateTime, Utc};
use shopcart_core::{Catalog, Money};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use commands::{execute, parse_command, Command, Response};
use error::ApiError;
use state::{CartState, ConfigState};

/// What a finished session leaves behind in the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub commands: usize,
    pub errors: usize,
    pub total_items: u64,
    pub total_price: Money,
}

/// Runs an interactive session on stdin/stdout.
///
/// ## Startup Sequence
/// 1. Initialize logging (stderr, `RUST_LOG` aware)
/// 2. Load configuration from `SHOPCART_*` variables
/// 3. Build the catalog
/// 4. Run the session until `quit` or end of input
pub fn run() -> Result<SessionSummary, ApiError> {
    init_tracing();

    let config = ConfigState::from_env()?;
    info!(
        currency = %config.currency_code,
        output = ?config.output,
        "Starting shopcart session"
    );

    let catalog = Catalog::default();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_session(&catalog, &config, stdin.lock(), &mut out)
}

/// Runs a session over any line source and sink.
///
/// Command errors and undecodable lines are written to `output` and the
/// session continues; I/O errors end the session.
pub fn run_session<R, W>(
    catalog: &Catalog,
    config: &ConfigState,
    mut input: R,
    output: &mut W,
) -> Result<SessionSummary, ApiError>
where
    R: BufRead,
    W: Write,
{
    let mut cart = CartState::new();
    let mut executed = 0;
    let mut errors = 0;

    info!(
        session_id = %cart.session_id(),
        products = catalog.len(),
        "Session started"
    );

    view::write_response(
        output,
        config,
        &Response::Catalog(commands::catalog::list_products(catalog)),
    )?;
    view::write_response(
        output,
        config,
        &Response::Cart(commands::cart::get_cart(&cart)),
    )?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(err) => {
                errors += 1;
                warn!(bytes = buf.len(), error = %err, "Rejected non UTF-8 input line");
                let err = ApiError::validation("input line is not valid UTF-8");
                view::write_response(output, config, &Response::Error(err))?;
                continue;
            }
        };

        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                errors += 1;
                warn!(line = %line.trim(), error = %err, "Rejected input line");
                view::write_response(output, config, &Response::Error(err))?;
                continue;
            }
        };

        if command == Command::Quit {
            debug!("quit requested");
            break;
        }

        executed += 1;
        let response = match execute(command, catalog, &mut cart) {
            Ok(response) => {
                if command.is_mutation() {
                    debug!(lines = cart.cart().len(), "cart updated");
                }
                response
            }
            Err(err) => {
                errors += 1;
                warn!(command = ?command, error = %err, "Command failed");
                Response::Error(err)
            }
        };

        view::write_response(output, config, &response)?;
    }

    let summary = SessionSummary {
        session_id: cart.session_id(),
        started_at: cart.started_at(),
        commands: executed,
        errors,
        total_items: cart.cart().total_items(),
        total_price: cart.cart().total_price(),
    };

    info!(
        session_id = %summary.session_id,
        commands = summary.commands,
        errors = summary.errors,
        total_items = summary.total_items,
        total_price = %summary.total_price,
        elapsed_ms = cart.elapsed().num_milliseconds(),
        "Session ended"
    );

    Ok(summary)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command
/// - `RUST_LOG=shopcart=trace` - Also show each reducer action
/// - Default: warnings, plus session start/end
///
/// Logs go to stderr; stdout carries only the view.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,shopcart=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
