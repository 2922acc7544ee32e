//! Wire types for the assistant REST API. Shapes here mirror the server's
//! JSON exactly; the state layer has its own types and maps at the client
//! boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssistantId(pub String);

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadId(pub String);

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub String);

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Assistant,
    User,
}

/// A message body, discriminated by `type` with the payload under
/// `content`: `{"type": "text", "content": {"message": "..."}}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum MessageValue {
    Text { message: String },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Assistant {
    pub id: AssistantId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub instructions: String,
    pub model: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Thread {
    pub id: ThreadId,
    pub name: String,
    pub assistant_id: AssistantId,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub value: MessageValue,
}

// GET /
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssistantResponse {
    pub assistant: Assistant,
}

// PATCH /{assistant_id}
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateAssistantRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateAssistantResponse {
    pub assistant: Assistant,
}

// DELETE /{assistant_id}
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteAssistantResponse {
    pub assistant: Assistant,
}

// GET /{assistant_id}/threads
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThreadsResponse {
    pub threads: Vec<Thread>,
}

// POST /{assistant_id}/threads
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateThreadRequest {
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateThreadResponse {
    pub thread: Thread,
    pub messages: Vec<Message>,
}

// GET /{assistant_id}/threads/{thread_id}/messages
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

// POST /{assistant_id}/threads/{thread_id}/messages
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub assistant_id: AssistantId,
    pub thread_id: ThreadId,
    pub messages: Vec<Message>,
}

// DELETE /{assistant_id}/threads/{thread_id}
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteThreadResponse {
    pub thread: Thread,
}

// PATCH /{assistant_id}/threads/{thread_id}
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateThreadRequest {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateThreadResponse {
    pub thread: Thread,
}

/// Failure payload. FastAPI-style servers put the text under `detail`;
/// others use `message`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}
