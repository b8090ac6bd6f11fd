//! Room administration CLI for a Retro AIM Server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin rasadmin -- get public
//! ```

use rasadmin::logger::setup_logger;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "warn");

    rasadmin::run_cli().await
}
