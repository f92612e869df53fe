//! In-process server fixture for client integration tests.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc};

use roji_client::{Client, ClientConfig, InMemoryDatabase, WsConnection};
use roji_server::{infrastructure::repository::InMemoryChannelRepository, serve, ui::state::AppState};
use roji_shared::Name;
use tokio::{net::TcpListener, sync::oneshot};

/// A server bound to an ephemeral localhost port, stopped on drop.
pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let state = Arc::new(AppState::new(Arc::new(InMemoryChannelRepository::new())));
        let (shutdown, rx) = oneshot::channel::<()>();
        tokio::spawn(serve(listener, state, async {
            let _ = rx.await;
        }));

        Self {
            addr,
            shutdown: Some(shutdown),
        }
    }

    pub fn config(&self, username: &str) -> ClientConfig {
        ClientConfig {
            username: Name::new(username).expect("valid test username"),
            server_host: self.addr.ip().to_string(),
            server_port: self.addr.port(),
            ..ClientConfig::defaults()
        }
    }

    /// Connect a client with a fresh in-memory database.
    pub async fn connect(&self, username: &str) -> (Client, Arc<InMemoryDatabase>) {
        let config = self.config(username);
        let connection = WsConnection::connect(&config.server_url())
            .await
            .expect("Failed to connect to test server");
        let database = Arc::new(InMemoryDatabase::new());
        let client = Client::new(Box::new(connection), database.clone(), &config);
        (client, database)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}
