use super::{
    Assistant, Message, MessageList, OperationState, Thread, ThreadId, ThreadList,
};

/// Everything the presentation layer reads: the assistant singleton, the
/// thread and message stores, the current selection, and one lifecycle
/// tracker per remote operation. Mutation happens only through
/// [`ChatState::apply`].
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub assistant: Option<Assistant>,
    pub threads: ThreadList,
    pub messages: MessageList,
    pub selected_thread_id: Option<ThreadId>,

    pub fetch_assistant: OperationState,
    pub fetch_threads: OperationState,
    pub fetch_messages: OperationState,
    pub initialize_thread: OperationState,
    pub send_message: OperationState,
    pub delete_assistant: OperationState,
    pub delete_thread: OperationState,
    pub update_assistant: OperationState,
    pub update_thread: OperationState,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Threads, newest first.
    pub fn threads(&self) -> &[Thread] {
        self.threads.as_slice()
    }

    /// Messages of the selected thread, in arrival order.
    pub fn messages(&self) -> &[Message] {
        self.messages.as_slice()
    }

    pub fn selected_thread(&self) -> Option<&Thread> {
        self.selected_thread_id
            .as_ref()
            .and_then(|id| self.threads.get(id))
    }

    /// True while any remote operation is in flight. Gates the prompt input
    /// and its submit shortcut.
    pub fn not_ready_for_prompt(&self) -> bool {
        self.operations().iter().any(|op| op.is_pending())
    }

    fn operations(&self) -> [&OperationState; 9] {
        [
            &self.fetch_assistant,
            &self.fetch_threads,
            &self.fetch_messages,
            &self.initialize_thread,
            &self.send_message,
            &self.delete_assistant,
            &self.delete_thread,
            &self.update_assistant,
            &self.update_thread,
        ]
    }
}
