use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub const SELF_NAME: &str = "You";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub from: String,
    pub body: String,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.from, self.body)
    }
}

/// A one-to-one conversation held in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub peer: String,
    pub messages: Vec<Message>,
}

impl Thread {
    pub fn new(peer: impl Into<String>) -> Self {
        Self { peer: peer.into(), messages: Vec::new() }
    }

    /// The sample conversation with Nova J.
    pub fn seed() -> Self {
        Self {
            peer: "Nova J.".into(),
            messages: vec![
                Message {
                    id: 1,
                    from: SELF_NAME.into(),
                    body: "Hey, loved your last video — are you free Saturday?".into(),
                },
                Message { id: 2, from: "Nova J.".into(), body: "Possibly! What time + rate?".into() },
            ],
        }
    }

    /// Append a message from the viewer. Empty bodies are ignored.
    pub fn send(&mut self, body: &str) -> Option<&Message> {
        if body.is_empty() {
            return None;
        }
        let id = self.messages.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        self.messages.push(Message { id, from: SELF_NAME.into(), body: body.to_string() });
        debug!(peer = %self.peer, id, "message sent");
        self.messages.last()
    }

    pub fn title(&self) -> String {
        format!("Chat with {}", self.peer)
    }
}
