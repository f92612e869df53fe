//! Per-connection packet dispatch.

use std::sync::Arc;

use roji_shared::{Connection, Packet, TransportError};
use thiserror::Error;

use crate::{
    domain::{ChannelRepository, Name},
    usecase::{RequestUpdatesUseCase, UpdateChannelError, UpdateChannelUseCase},
};

/// Errors that end a session
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A packet other than login arrived before the client logged in
    #[error("Client sent a {0} packet before logging in")]
    NotLoggedIn(&'static str),

    /// The client sent a packet only the server may send
    #[error("Unexpected {0} packet from client")]
    UnexpectedPacket(&'static str),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    UpdateChannel(#[from] UpdateChannelError),
}

/// Handles a single client's packets, one at a time.
///
/// The session owns its connection, so responses of one request are never
/// interleaved with another request's.
pub struct SessionHandler<C> {
    connection: C,
    repository: Arc<dyn ChannelRepository>,
    username: Option<Name>,
}

impl<C: Connection> SessionHandler<C> {
    pub fn new(connection: C, repository: Arc<dyn ChannelRepository>) -> Self {
        Self {
            connection,
            repository,
            username: None,
        }
    }

    /// Identity bound by the last login packet, if any.
    pub fn username(&self) -> Option<&Name> {
        self.username.as_ref()
    }

    /// Read and handle packets until the client disconnects.
    pub async fn run(mut self) -> Result<(), DispatchError> {
        loop {
            let packet = match self.connection.read().await {
                Ok(Some(packet)) => packet,
                Ok(None) => {
                    tracing::debug!("Ignoring end-of-stream marker from client");
                    continue;
                }
                Err(TransportError::Disconnected) => {
                    tracing::info!(
                        "Client '{}' disconnected",
                        self.username.as_ref().map_or("<anonymous>", Name::as_str)
                    );
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };

            self.handle_packet(packet).await?;
        }
    }

    /// Handle one packet from the client.
    pub async fn handle_packet(&mut self, packet: Packet) -> Result<(), DispatchError> {
        let kind = packet.kind();
        tracing::debug!("Handling {} packet", kind);

        match packet {
            Packet::Login { username } => {
                tracing::info!("Client logged in as '{}'", username);
                self.username = Some(username);
                Ok(())
            }
            Packet::RequestUpdates => {
                let username = self.require_login(kind)?;
                self.stream_updates(&username).await
            }
            Packet::UpdateChannel {
                channel_id,
                name,
                members,
            } => {
                let sender = self.require_login(kind)?;
                UpdateChannelUseCase::new(self.repository.clone())
                    .execute(sender, channel_id, name, members)
                    .await?;
                Ok(())
            }
            Packet::ChannelUpdated { .. } => Err(DispatchError::UnexpectedPacket(kind)),
        }
    }

    fn require_login(&self, kind: &'static str) -> Result<Name, DispatchError> {
        self.username
            .clone()
            .ok_or(DispatchError::NotLoggedIn(kind))
    }

    /// Send every pending update, then the end-of-stream marker.
    async fn stream_updates(&mut self, username: &Name) -> Result<(), DispatchError> {
        let usecase = RequestUpdatesUseCase::new(self.repository.clone());
        let updates = usecase.execute(username).await;
        let count = updates.len();

        for update in updates {
            self.connection
                .send(Some(Packet::ChannelUpdated {
                    channel_id: update.channel_id,
                    name: update.name.clone(),
                }))
                .await?;
            usecase.acknowledge(username, &update).await;
        }
        self.connection.send(None).await?;

        tracing::info!("Sent {} update(s) to '{}'", count, username);
        Ok(())
    }
}
