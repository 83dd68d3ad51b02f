//! WebServer entry point
//!
//! Loads the saved check-in state from the data directory and serves the
//! JSON API.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use shared::{ProcessId, STORAGE_KEY, logging, process_info};
use tracker::services::RealFileStore;
use tracker::{CheckInEngine, StateStore};

use webserver::{WebServer, WebServerError, WebServerResult};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "HTTP front end for the attendee check-in tracker")]
struct Args {
    /// Port for HTTP server
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Directory holding the saved state
    #[arg(long, env = "CHECKIN_DATA_DIR", default_value = "./data")]
    data_dir: PathBuf,

    /// Key the state is saved under
    #[arg(long, env = "CHECKIN_STORAGE_KEY", default_value = STORAGE_KEY)]
    storage_key: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CHECKIN_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    ProcessId::init_webserver();
    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(ProcessId::current(), &format!("webserver on port {}", args.port));

    let http_addr: SocketAddr = format!("127.0.0.1:{}", args.port)
        .parse()
        .map_err(|e| WebServerError::config(format!("Invalid port: {e}")))?;

    let medium = RealFileStore::with_base_dir(&args.data_dir);
    let mut engine = CheckInEngine::new(StateStore::new(medium, args.storage_key));
    let outcome = engine.load();
    process_info!(ProcessId::current(), "📂 State load: {:?}", outcome);

    let webserver = WebServer::new(http_addr, engine);
    webserver.run().await?;

    logging::log_success(ProcessId::current(), "WebServer stopped gracefully");
    Ok(())
}
