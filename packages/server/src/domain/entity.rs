//! Core domain models for the sync server.

use serde::{Deserialize, Serialize};

use super::{ChannelId, Name, Timestamp};

/// Represents a channel with its declared members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel identifier (never changes)
    pub id: ChannelId,
    /// Current channel name
    pub name: Name,
    /// Members listed by whoever declared the channel last
    pub members: Vec<Name>,
    /// User who declared the channel last (implicit member)
    pub declared_by: Name,
    /// Timestamp when the channel was created
    pub created_at: Timestamp,
}

impl Channel {
    /// Create a new channel. Duplicate members are dropped, first occurrence wins.
    pub fn new(
        id: ChannelId,
        name: Name,
        members: Vec<Name>,
        declared_by: Name,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            members: dedup(members),
            declared_by,
            created_at,
        }
    }

    /// Re-declare the channel under a new name and member list.
    ///
    /// The id and the creation timestamp are kept.
    pub fn redeclare(&mut self, name: Name, members: Vec<Name>, declared_by: Name) {
        self.name = name;
        self.members = dedup(members);
        self.declared_by = declared_by;
    }

    /// A private channel has exactly one declared member and carries that member's name.
    pub fn is_private(&self) -> bool {
        self.members.len() == 1 && self.members[0] == self.name
    }

    /// Everyone who has to be told about this channel: the declarer first, then the members.
    pub fn participants(&self) -> Vec<Name> {
        let mut participants = Vec::with_capacity(self.members.len() + 1);
        participants.push(self.declared_by.clone());
        participants.extend(self.members.iter().cloned());
        dedup(participants)
    }

    /// Name of the channel as seen by `viewer`.
    ///
    /// In a private channel the declarer sees the other party's name and the
    /// other party sees the declarer's name.
    pub fn name_for(&self, viewer: &Name) -> Name {
        if self.is_private() && viewer != &self.declared_by {
            self.declared_by.clone()
        } else {
            self.name.clone()
        }
    }
}

fn dedup(names: Vec<Name>) -> Vec<Name> {
    let mut unique: Vec<Name> = Vec::with_capacity(names.len());
    for name in names {
        if !unique.contains(&name) {
            unique.push(name);
        }
    }
    unique
}

/// A channel update waiting to be delivered to one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingUpdate {
    pub channel_id: ChannelId,
    pub name: Name,
}

impl PendingUpdate {
    pub fn new(channel_id: ChannelId, name: Name) -> Self {
        Self { channel_id, name }
    }
}
