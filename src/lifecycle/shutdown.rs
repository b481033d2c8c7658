//! Stop signal shared by the signal listener, the HTTP server and tests.
//!
//! `main` creates one `Shutdown`, hands a clone to the signal listener and a
//! receiver to `HttpServer::run`. Integration tests trigger it when their
//! `TestServer` drops, so every spawned server stops with its test.

use tokio::sync::broadcast;

/// Fires once to stop accepting connections.
///
/// In-flight requests, including uploads still streaming to disk, finish
/// before `HttpServer::run` returns.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver to pass to `HttpServer::run` or [`wait`].
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Stop every subscribed server. Harmless when nothing is listening.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Servers that have not stopped yet.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Graceful-shutdown future for `axum::serve`.
///
/// Resolves on trigger, or when every `Shutdown` handle is dropped.
pub async fn wait(mut rx: broadcast::Receiver<()>) {
    let _ = rx.recv().await;
}
