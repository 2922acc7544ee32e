use crate::{Assistant, AssistantUpdate, Message, Thread, ThreadId};

#[derive(Clone, Debug)]
pub enum Action {
    FetchAssistant,
    AssistantFetched {
        assistant: Assistant,
    },
    AssistantFetchFailed {
        message: String,
    },

    FetchThreads,
    ThreadsFetched {
        threads: Vec<Thread>,
    },
    ThreadsFetchFailed {
        message: String,
    },

    /// `None` clears the selection (the "new chat" gesture). Either way the
    /// message store is emptied; selecting a concrete thread also starts a
    /// message fetch for it.
    SelectThread {
        thread_id: Option<ThreadId>,
    },

    FetchMessages {
        thread_id: ThreadId,
    },
    MessagesFetched {
        messages: Vec<Message>,
    },
    MessagesFetchFailed {
        message: String,
    },

    /// Appends the user's turn locally, then either starts a new thread or
    /// posts to the selected one, decided against the selection at the
    /// moment of reduction.
    SendPrompt {
        text: String,
    },
    ThreadInitialized {
        thread: Thread,
        messages: Vec<Message>,
    },
    ThreadInitializeFailed {
        message: String,
    },
    MessageSent {
        thread_id: ThreadId,
        messages: Vec<Message>,
    },
    MessageSendFailed {
        message: String,
    },

    DeleteThread {
        thread_id: ThreadId,
    },
    ThreadDeleted {
        thread: Thread,
    },
    ThreadDeleteFailed {
        message: String,
    },

    RenameThread {
        thread_id: ThreadId,
        name: String,
    },
    ThreadRenamed {
        thread: Thread,
    },
    ThreadRenameFailed {
        message: String,
    },

    DeleteAssistant,
    AssistantDeleted {
        assistant: Assistant,
    },
    AssistantDeleteFailed {
        message: String,
    },

    UpdateAssistant {
        update: AssistantUpdate,
    },
    AssistantUpdated {
        assistant: Assistant,
    },
    AssistantUpdateFailed {
        message: String,
    },

    ResetThreads,
    ResetMessages,
    ResetDeleteThreadStatus,
    ResetUpdateThreadStatus,
    ResetDeleteAssistantStatus,
    ResetUpdateAssistantStatus,
    ResetAssistant,
}
