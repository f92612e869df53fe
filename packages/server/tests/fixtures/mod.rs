//! In-process server fixture for integration tests.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc};

use roji_server::{
    domain::ChannelRepository, infrastructure::repository::InMemoryChannelRepository, serve,
    ui::state::AppState,
};
use tokio::{net::TcpListener, sync::oneshot};

/// A server bound to an ephemeral localhost port, stopped on drop.
pub struct TestServer {
    addr: SocketAddr,
    repository: Arc<InMemoryChannelRepository>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let repository = Arc::new(InMemoryChannelRepository::new());
        let state = Arc::new(AppState::new(repository.clone()));
        let (shutdown, rx) = oneshot::channel::<()>();
        tokio::spawn(serve(listener, state, async {
            let _ = rx.await;
        }));

        Self {
            addr,
            repository,
            shutdown: Some(shutdown),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    pub fn repository(&self) -> Arc<dyn ChannelRepository> {
        self.repository.clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}
