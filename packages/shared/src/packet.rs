//! Packets exchanged between the client and the server.
//!
//! `Packet` is a closed set: every consumer matches on it exhaustively, so a
//! new packet kind is a compile error at each dispatch site until handled.
//! The end-of-stream marker is not a packet; it travels as `Option::<Packet>::None`.

use serde::{Deserialize, Serialize};

use crate::domain::{ChannelId, Name};

/// One typed message exchanged over a [`Connection`](crate::connection::Connection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Packet {
    /// Announces the identity of the client. Sent once, before anything else.
    Login { username: Name },

    /// Asks the server for every pending channel update.
    ///
    /// The server answers with zero or more [`Packet::ChannelUpdated`]
    /// followed by the end-of-stream marker.
    RequestUpdates,

    /// The channel `channel_id` is now called `name`.
    ChannelUpdated { channel_id: ChannelId, name: Name },

    /// Creates a channel (`channel_id` is `None`) or re-declares an existing one.
    ///
    /// The sender is an implicit member and is not listed in `members`.
    UpdateChannel {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        channel_id: Option<ChannelId>,
        name: Name,
        members: Vec<Name>,
    },
}

impl Packet {
    /// Short, stable name of the packet kind, used in logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Packet::Login { .. } => "login",
            Packet::RequestUpdates => "request-updates",
            Packet::ChannelUpdated { .. } => "channel-updated",
            Packet::UpdateChannel { .. } => "update-channel",
        }
    }
}
