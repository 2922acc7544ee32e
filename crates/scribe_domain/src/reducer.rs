use crate::{
    Action, AssistantId, ChatState, Effect, Message, MessageId, MessageValue, Role,
};
use chrono::Utc;
use uuid::Uuid;

/// The user's turn as shown before the server has seen it. The id is local
/// and never reconciled against a server id; v7 keeps ids time-ordered.
fn local_user_message(text: String) -> Message {
    Message {
        id: MessageId::new(Uuid::now_v7().to_string()),
        role: Role::User,
        created_at: Utc::now(),
        value: MessageValue::Text { message: text },
    }
}

impl ChatState {
    fn assistant_id(&self) -> Option<AssistantId> {
        self.assistant.as_ref().map(|assistant| assistant.id.clone())
    }

    /// Applies one action and returns the remote calls the runtime must
    /// perform. Every remote invoke other than the assistant fetch itself
    /// is dropped while no assistant is loaded, since there is no id to
    /// address the call to.
    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::FetchAssistant => {
                self.fetch_assistant.begin();
                vec![Effect::FetchAssistant]
            }
            Action::AssistantFetched { assistant } => {
                let assistant_id = assistant.id.clone();
                self.assistant = Some(assistant);
                self.fetch_assistant.succeed();
                // Threads are only addressable once the assistant id is
                // known, so their first fetch chains off this one.
                self.fetch_threads.begin();
                vec![Effect::FetchThreads { assistant_id }]
            }
            Action::AssistantFetchFailed { message } => {
                self.fetch_assistant.fail(message);
                Vec::new()
            }

            Action::FetchThreads => {
                let Some(assistant_id) = self.assistant_id() else {
                    return Vec::new();
                };
                self.fetch_threads.begin();
                vec![Effect::FetchThreads { assistant_id }]
            }
            Action::ThreadsFetched { threads } => {
                self.threads.replace_all(threads);
                self.fetch_threads.succeed();
                Vec::new()
            }
            Action::ThreadsFetchFailed { message } => {
                self.fetch_threads.fail(message);
                Vec::new()
            }

            Action::SelectThread { thread_id } => {
                self.selected_thread_id = thread_id.clone();
                self.messages.clear();
                let Some(thread_id) = thread_id else {
                    return Vec::new();
                };
                let Some(assistant_id) = self.assistant_id() else {
                    return Vec::new();
                };
                self.fetch_messages.begin();
                vec![Effect::FetchMessages {
                    assistant_id,
                    thread_id,
                }]
            }

            Action::FetchMessages { thread_id } => {
                let Some(assistant_id) = self.assistant_id() else {
                    return Vec::new();
                };
                self.fetch_messages.begin();
                vec![Effect::FetchMessages {
                    assistant_id,
                    thread_id,
                }]
            }
            Action::MessagesFetched { messages } => {
                // No staleness guard: whichever in-flight fetch resolves
                // last owns the store, even if the selection moved on.
                self.messages.replace_all(messages);
                self.fetch_messages.succeed();
                Vec::new()
            }
            Action::MessagesFetchFailed { message } => {
                self.fetch_messages.fail(message);
                Vec::new()
            }

            Action::SendPrompt { text } => {
                let Some(assistant_id) = self.assistant_id() else {
                    return Vec::new();
                };
                self.messages.push(local_user_message(text.clone()));
                match self.selected_thread_id.clone() {
                    Some(thread_id) => {
                        self.send_message.begin();
                        vec![Effect::SendMessage {
                            assistant_id,
                            thread_id,
                            prompt: text,
                        }]
                    }
                    None => {
                        self.initialize_thread.begin();
                        vec![Effect::InitializeThread {
                            assistant_id,
                            prompt: text,
                        }]
                    }
                }
            }
            Action::ThreadInitialized { thread, messages } => {
                self.selected_thread_id = Some(thread.id.clone());
                self.threads.insert(thread);
                self.messages.extend(messages);
                self.initialize_thread.succeed();
                Vec::new()
            }
            Action::ThreadInitializeFailed { message } => {
                self.initialize_thread.fail(message);
                Vec::new()
            }
            Action::MessageSent {
                thread_id: _,
                messages,
            } => {
                self.messages.extend(messages);
                self.send_message.succeed();
                Vec::new()
            }
            Action::MessageSendFailed { message } => {
                self.send_message.fail(message);
                Vec::new()
            }

            Action::DeleteThread { thread_id } => {
                let Some(assistant_id) = self.assistant_id() else {
                    return Vec::new();
                };
                self.delete_thread.begin();
                vec![Effect::DeleteThread {
                    assistant_id,
                    thread_id,
                }]
            }
            Action::ThreadDeleted { thread } => {
                self.threads.remove(&thread.id);
                if self.selected_thread_id.as_ref() == Some(&thread.id) {
                    self.selected_thread_id = None;
                    self.messages.clear();
                }
                self.delete_thread.succeed();
                Vec::new()
            }
            Action::ThreadDeleteFailed { message } => {
                self.delete_thread.fail(message);
                Vec::new()
            }

            Action::RenameThread { thread_id, name } => {
                let Some(assistant_id) = self.assistant_id() else {
                    return Vec::new();
                };
                self.update_thread.begin();
                vec![Effect::RenameThread {
                    assistant_id,
                    thread_id,
                    name,
                }]
            }
            Action::ThreadRenamed { thread } => {
                self.threads.update(thread);
                self.update_thread.succeed();
                Vec::new()
            }
            Action::ThreadRenameFailed { message } => {
                self.update_thread.fail(message);
                Vec::new()
            }

            Action::DeleteAssistant => {
                let Some(assistant_id) = self.assistant_id() else {
                    return Vec::new();
                };
                self.delete_assistant.begin();
                vec![Effect::DeleteAssistant { assistant_id }]
            }
            Action::AssistantDeleted { assistant: _ } => {
                self.assistant = None;
                self.threads.clear();
                self.messages.clear();
                self.selected_thread_id = None;
                self.delete_assistant.succeed();
                Vec::new()
            }
            Action::AssistantDeleteFailed { message } => {
                self.delete_assistant.fail(message);
                Vec::new()
            }

            Action::UpdateAssistant { update } => {
                let Some(assistant_id) = self.assistant_id() else {
                    return Vec::new();
                };
                self.update_assistant.begin();
                vec![Effect::UpdateAssistant {
                    assistant_id,
                    update,
                }]
            }
            Action::AssistantUpdated { assistant } => {
                self.assistant = Some(assistant);
                self.update_assistant.succeed();
                Vec::new()
            }
            Action::AssistantUpdateFailed { message } => {
                self.update_assistant.fail(message);
                Vec::new()
            }

            Action::ResetThreads => {
                self.threads.clear();
                Vec::new()
            }
            Action::ResetMessages => {
                self.messages.clear();
                Vec::new()
            }
            Action::ResetDeleteThreadStatus => {
                self.delete_thread.reset();
                Vec::new()
            }
            Action::ResetUpdateThreadStatus => {
                self.update_thread.reset();
                Vec::new()
            }
            Action::ResetDeleteAssistantStatus => {
                self.delete_assistant.reset();
                Vec::new()
            }
            Action::ResetUpdateAssistantStatus => {
                self.update_assistant.reset();
                Vec::new()
            }
            Action::ResetAssistant => {
                self.assistant = None;
                self.threads.clear();
                self.messages.clear();
                self.selected_thread_id = None;
                Vec::new()
            }
        }
    }
}
