//! Client sync engine.
//!
//! [`Client`] drives one connection to the server: it logs in lazily, pulls
//! pending channel updates into the local [`Database`], and declares channels.
//! Every operation takes `&mut self`, so a session never has two requests in
//! flight.

use std::{sync::Arc, time::Duration};

use roji_shared::{ChannelId, Connection, Name, Packet};

use crate::{
    config::ClientConfig,
    database::{ChannelConfig, Database},
    error::ClientError,
};

/// Where the session stands on this connection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    NotLoggedIn,
    LoggedIn,
    /// A reply was not read up to its end-of-stream marker (timeout, protocol
    /// error or a cancelled sync). Later frames can no longer be matched to
    /// requests, so the connection has to be replaced.
    Desynced,
}

pub struct Client {
    connection: Box<dyn Connection>,
    database: Arc<dyn Database>,
    username: Name,
    read_timeout: Duration,
    state: SessionState,
}

impl Client {
    /// Wrap an open connection. Nothing is sent until the first operation.
    pub fn new(
        connection: Box<dyn Connection>,
        database: Arc<dyn Database>,
        config: &ClientConfig,
    ) -> Self {
        Self {
            connection,
            database,
            username: config.username.clone(),
            read_timeout: config.read_timeout(),
            state: SessionState::default(),
        }
    }

    /// Override the per-read timeout taken from the configuration.
    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    pub fn username(&self) -> &Name {
        &self.username
    }

    pub fn session_state(&self) -> SessionState {
        self.state
    }

    pub fn database(&self) -> &Arc<dyn Database> {
        &self.database
    }

    /// Send the login packet unless it was already sent on this connection.
    pub async fn ensure_login(&mut self) -> Result<(), ClientError> {
        match self.state {
            SessionState::LoggedIn => return Ok(()),
            SessionState::Desynced => return Err(ClientError::Desynced),
            SessionState::NotLoggedIn => {}
        }

        self.connection
            .send(Some(Packet::Login {
                username: self.username.clone(),
            }))
            .await?;
        self.state = SessionState::LoggedIn;

        tracing::info!("Logged in as '{}'", self.username);
        Ok(())
    }

    /// Pull every pending channel update and store it locally.
    ///
    /// Updates are saved in the order they arrive. Returns how many were applied.
    ///
    /// If the reply is not consumed up to its end-of-stream marker, the session
    /// is left [`SessionState::Desynced`] and every later operation fails.
    pub async fn sync(&mut self) -> Result<usize, ClientError> {
        self.ensure_login().await?;

        // Cleared once the end-of-stream marker of this request is read.
        self.state = SessionState::Desynced;
        self.connection.send(Some(Packet::RequestUpdates)).await?;

        let mut applied = 0;
        loop {
            match self.read().await? {
                None => {
                    self.state = SessionState::LoggedIn;
                    break;
                }
                Some(Packet::ChannelUpdated { channel_id, name }) => {
                    tracing::debug!("Channel '{}' is now {}", name, channel_id);
                    self.database
                        .save_channel(name, ChannelConfig::new(channel_id))
                        .await?;
                    applied += 1;
                }
                Some(other) => {
                    return Err(ClientError::Protocol {
                        expected: "channel-updated or end-of-stream",
                        received: other.kind(),
                    });
                }
            }
        }

        tracing::info!("Sync finished, {} update(s) applied", applied);
        Ok(applied)
    }

    /// Open a one-to-one channel with `other_user`.
    ///
    /// The channel is named after the other user; the server shows it to
    /// `other_user` under this client's name.
    pub async fn create_private_channel(&mut self, other_user: Name) -> Result<(), ClientError> {
        let members = vec![other_user.clone()];
        self.update_channel(None, other_user, members).await
    }

    /// Declare a new channel with a name and member list.
    pub async fn create_group_channel(
        &mut self,
        name: Name,
        members: Vec<Name>,
    ) -> Result<(), ClientError> {
        self.update_channel(None, name, members).await
    }

    /// Redeclare an existing channel. The id stays the same.
    pub async fn rename_channel(
        &mut self,
        channel_id: ChannelId,
        name: Name,
        members: Vec<Name>,
    ) -> Result<(), ClientError> {
        self.update_channel(Some(channel_id), name, members).await
    }

    async fn update_channel(
        &mut self,
        channel_id: Option<ChannelId>,
        name: Name,
        members: Vec<Name>,
    ) -> Result<(), ClientError> {
        if members.is_empty() {
            return Err(ClientError::InvalidArgument(format!(
                "channel '{}' needs at least one member",
                name
            )));
        }

        self.ensure_login().await?;
        tracing::debug!("Declaring channel '{}' with {} member(s)", name, members.len());
        self.connection
            .send(Some(Packet::UpdateChannel {
                channel_id,
                name,
                members,
            }))
            .await?;
        Ok(())
    }

    async fn read(&mut self) -> Result<Option<Packet>, ClientError> {
        tokio::time::timeout(self.read_timeout, self.connection.read())
            .await
            .map_err(|_| ClientError::Timeout(self.read_timeout))?
            .map_err(ClientError::from)
    }
}
