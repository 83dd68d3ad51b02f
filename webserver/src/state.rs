//! Webserver state management

use std::net::SocketAddr;
use std::time::Instant;

use tokio::sync::Mutex;
use tracker::{CheckInEngine, KeyValueStore};

/// Core webserver state
///
/// The engine sits behind a single lock; each request runs a whole check-in
/// while holding it.
pub struct WebServerState<K: KeyValueStore> {
    pub bind_address: SocketAddr,
    pub engine: Mutex<CheckInEngine<K>>,
    pub server_start_time: Instant,
}

impl<K: KeyValueStore> WebServerState<K> {
    pub fn new(bind_address: SocketAddr, engine: CheckInEngine<K>) -> Self {
        Self {
            bind_address,
            engine: Mutex::new(engine),
            server_start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}
