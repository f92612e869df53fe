//! Channel sync server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin roji-server -- --port 1337
//! ```

use clap::Parser;
use roji_shared::logger::setup_logger;

#[derive(Debug, Parser)]
#[command(version, about = "Roji channel sync server")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 1337)]
    port: u16,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    // Run the server
    if let Err(e) = roji_server::run_server(&args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
