use crate::{Assistant, AssistantId, AssistantUpdate, Message, Thread, ThreadId};
use async_trait::async_trait;

/// A freshly created thread together with the assistant's opening replies.
#[derive(Clone, Debug)]
pub struct StartedThread {
    pub thread: Thread,
    pub messages: Vec<Message>,
}

/// The assistant's replies to one posted prompt. The server does not echo
/// the user's own turn back.
#[derive(Clone, Debug)]
pub struct ThreadReply {
    pub thread_id: ThreadId,
    pub messages: Vec<Message>,
}

/// The remote assistant API. Errors are display-ready message strings; the
/// state layer never sees transport detail.
#[async_trait]
pub trait AssistantService: Send + Sync {
    async fn fetch_assistant(&self) -> Result<Assistant, String>;

    async fn list_threads(&self, assistant_id: AssistantId) -> Result<Vec<Thread>, String>;

    async fn list_messages(
        &self,
        assistant_id: AssistantId,
        thread_id: ThreadId,
    ) -> Result<Vec<Message>, String>;

    async fn create_thread(
        &self,
        assistant_id: AssistantId,
        message: String,
    ) -> Result<StartedThread, String>;

    async fn send_message(
        &self,
        assistant_id: AssistantId,
        thread_id: ThreadId,
        message: String,
    ) -> Result<ThreadReply, String>;

    async fn delete_assistant(&self, assistant_id: AssistantId) -> Result<Assistant, String>;

    async fn delete_thread(
        &self,
        assistant_id: AssistantId,
        thread_id: ThreadId,
    ) -> Result<Thread, String>;

    async fn update_assistant(
        &self,
        assistant_id: AssistantId,
        update: AssistantUpdate,
    ) -> Result<Assistant, String>;

    async fn rename_thread(
        &self,
        assistant_id: AssistantId,
        thread_id: ThreadId,
        name: String,
    ) -> Result<Thread, String>;
}
