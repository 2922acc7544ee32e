use super::AssistantId;
use chrono::{DateTime, Utc};

/// The remote assistant this session talks to. Loaded once per session and
/// replaced wholesale when the server confirms an update.
#[derive(Clone, Debug)]
pub struct Assistant {
    pub id: AssistantId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub instructions: String,
    pub model: String,
}

/// Fields a caller may change on the assistant. Unset fields are left as-is
/// by the server.
#[derive(Clone, Debug, Default)]
pub struct AssistantUpdate {
    pub name: Option<String>,
    pub instructions: Option<String>,
    pub model: Option<String>,
}
