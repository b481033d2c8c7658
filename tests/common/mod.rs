//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use assistant_server::{HttpServer, ServerConfig, Shutdown};
use tempfile::TempDir;
use tokio::net::TcpListener;

pub const INDEX_HTML: &str = "<!doctype html><title>assistant</title>";
pub const EXAMPLE_PDF: &[u8] = b"%PDF-1.4\n%fixture\n";

/// A server running on an ephemeral port with its own asset tree.
///
/// Dropping it triggers shutdown and removes the tree.
pub struct TestServer {
    pub addr: SocketAddr,
    pub root: TempDir,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.root.path().join("uploads")
    }

    /// Files currently in the upload directory.
    pub fn uploads(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(self.upload_dir())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        files.sort();
        files
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

fn write_assets(root: &Path) {
    std::fs::create_dir(root.join("static")).unwrap();
    std::fs::write(root.join("static/Example.pdf"), EXAMPLE_PDF).unwrap();
    std::fs::write(root.join("index.html"), INDEX_HTML).unwrap();
}

/// Start a server with a fresh asset tree.
pub async fn start_server() -> TestServer {
    let root = tempfile::tempdir().unwrap();
    write_assets(root.path());

    let mut config = ServerConfig::default();
    config.listener.host = "127.0.0.1".into();
    config.listener.port = 0;
    config.assets.static_dir = root.path().join("static");
    config.assets.index_file = root.path().join("index.html");
    config.assets.upload_dir = root.path().join("uploads");

    let listener = TcpListener::bind(config.bind_address()).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).unwrap();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer {
        addr,
        root,
        shutdown,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
