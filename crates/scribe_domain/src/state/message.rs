use super::MessageId;
use chrono::{DateTime, Utc};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Assistant,
    User,
}

/// Typed message content. A single kind today; matching stays exhaustive so
/// new kinds cannot be silently dropped by renderers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MessageValue {
    Text { message: String },
}

impl MessageValue {
    pub fn text(&self) -> Option<&str> {
        match self {
            MessageValue::Text { message } => Some(message),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub value: MessageValue,
}

/// Messages unique by id, in arrival order. Never re-sorted.
#[derive(Clone, Debug, Default)]
pub struct MessageList {
    items: Vec<Message>,
}

impl MessageList {
    pub fn replace_all(&mut self, messages: Vec<Message>) {
        self.items.clear();
        self.extend(messages);
    }

    /// Appends unless the id is already present.
    pub fn push(&mut self, message: Message) {
        if self.contains(&message.id) {
            return;
        }
        self.items.push(message);
    }

    pub fn extend(&mut self, messages: Vec<Message>) {
        for message in messages {
            self.push(message);
        }
    }

    pub fn remove(&mut self, id: &MessageId) -> bool {
        let Some(at) = self.items.iter().position(|m| &m.id == id) else {
            return false;
        };
        self.items.remove(at);
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, id: &MessageId) -> bool {
        self.items.iter().any(|m| &m.id == id)
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
