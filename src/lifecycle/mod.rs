//! Process lifecycle: startup order and graceful shutdown.
//!
//! ```text
//! main.rs:    load config → logging/metrics → bind → serve
//! signals.rs: SIGINT/SIGTERM → Shutdown::trigger → server drains → exit
//! ```

pub mod signals;

pub use signals::wait_for_shutdown_signal;

use tokio::sync::broadcast;

/// Fan-out of a single stop notification to the server and any helper tasks.
pub struct Shutdown(broadcast::Sender<()>);

impl Shutdown {
    pub fn new() -> Self {
        Self(broadcast::channel(1).0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.0.subscribe()
    }

    /// Notify current subscribers. A no-op when nobody is listening.
    pub fn trigger(&self) {
        let _ = self.0.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
