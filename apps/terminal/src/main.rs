//! # Bodega POS Terminal
//!
//! Entry point for the interactive console application.
//!
//! ## Startup Sequence
//! ```text
//! 1. Initialize logging (tracing-subscriber, RUST_LOG overridable)
//! 2. Build in-memory state: seeded catalog + empty user registry
//! 3. Run one interactive session over stdin/stdout
//! 4. Print the receipt and exit
//! ```
//!
//! There are no CLI flags, files or environment inputs besides `RUST_LOG`;
//! the sequential prompts are the program's entire interface.

mod prompt;
mod receipt;
mod session;

use bodega_core::{Catalog, UserRegistry};
use tracing::info;
use tracing_subscriber::EnvFilter;

use prompt::StdioPrompt;

fn main() {
    init_tracing();

    info!("Starting Bodega POS terminal");

    // All state for the run, constructed once and passed by reference
    let catalog = Catalog::seeded();
    let mut users = UserRegistry::new();
    let mut prompt = StdioPrompt::new();

    match session::run(&catalog, &mut users, &mut prompt) {
        Ok(bill) => {
            print!("{}", receipt::render_bill(&bill));
        }
        Err(err) => {
            eprintln!("Session failed: {err}");
            std::process::exit(1);
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bodega_core=debug` - Debug for the core crate only
/// - Default: INFO level
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
