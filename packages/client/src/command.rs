//! REPL command parsing.

use std::str::FromStr;

use roji_shared::{ChannelId, Name, ValueObjectError};
use thiserror::Error;

pub const HELP: &str = "\
Arguments containing spaces can be quoted: /group \"Book readers\" anna paul
Commands:
  /sync                              fetch channel updates from the server
  /private <user>                    open a private channel with <user>
  /group <name> <member>...          create a group channel
  /rename <id> <name> <member>...    redeclare channel <id>
  /channels                          list locally known channels
  /help                              show this help
  /quit                              exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Sync,
    Private(Name),
    Group {
        name: Name,
        members: Vec<Name>,
    },
    Rename {
        channel_id: ChannelId,
        name: Name,
        members: Vec<Name>,
    },
    Channels,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty input")]
    Empty,

    #[error("Unknown command: {0} (type /help)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unterminated quote")]
    UnterminatedQuote,

    #[error(transparent)]
    InvalidValue(#[from] ValueObjectError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words = split_words(line)?;
        let (head, args) = words.split_first().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        match head.as_str() {
            "/sync" => Ok(Command::Sync),
            "/channels" => Ok(Command::Channels),
            "/help" => Ok(Command::Help),
            "/quit" | "/exit" => Ok(Command::Quit),
            "/private" => match args.as_slice() {
                [user] => Ok(Command::Private(Name::new(*user)?)),
                _ => Err(CommandError::Usage("/private <user>")),
            },
            "/group" => match args.as_slice() {
                [name, members @ ..] if !members.is_empty() => Ok(Command::Group {
                    name: Name::new(*name)?,
                    members: parse_names(members)?,
                }),
                _ => Err(CommandError::Usage("/group <name> <member>...")),
            },
            "/rename" => match args.as_slice() {
                [id, name, members @ ..] if !members.is_empty() => Ok(Command::Rename {
                    channel_id: id.parse()?,
                    name: Name::new(*name)?,
                    members: parse_names(members)?,
                }),
                _ => Err(CommandError::Usage("/rename <id> <name> <member>...")),
            },
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Split on whitespace; a double-quoted section is one word.
fn split_words(line: &str) -> Result<Vec<String>, CommandError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quoted {
        return Err(CommandError::UnterminatedQuote);
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

fn parse_names(raw: &[&str]) -> Result<Vec<Name>, ValueObjectError> {
    raw.iter().map(|s| Name::new(*s)).collect()
}
