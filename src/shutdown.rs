use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::signal::ctrl_c;
use tokio::sync::Notify;
use tracing::{info, warn};

/// Ctrl-C driven cancellation token.
///
/// The pagination loop polls `is_shutdown` between page fetches, so a run
/// against a slow or endless history can be interrupted cleanly.
#[derive(Clone, Default)]
pub struct ShutdownManager {
    shutdown_flag: Arc<AtomicBool>,
    shutdown_notify: Arc<Notify>,
}

impl ShutdownManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown_flag.load(Ordering::SeqCst)
    }

    pub async fn wait_for_shutdown(&self) {
        self.shutdown_notify.notified().await;
    }

    pub fn shutdown(&self) {
        if !self.shutdown_flag.swap(true, Ordering::SeqCst) {
            info!("Shutdown signal received, initiating graceful shutdown...");
            self.shutdown_notify.notify_waiters();
        }
    }

    pub async fn wait_for_signal(&self) -> Result<(), std::io::Error> {
        ctrl_c().await?;
        info!("Received shutdown signal (Ctrl-C)");
        self.shutdown();
        Ok(())
    }
}

pub fn setup_shutdown_handler() -> ShutdownManager {
    let shutdown_manager = ShutdownManager::new();

    let handler = shutdown_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = handler.wait_for_signal().await {
            warn!("Error setting up signal handler: {}", e);
        }
    });

    shutdown_manager
}
