use anyhow::Context as _;
use scribe_domain::{Action, AssistantService, ChatState, Effect};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, oneshot};

#[derive(Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<SessionCommand>,
}

impl SessionHandle {
    pub async fn dispatch(&self, action: Action) -> anyhow::Result<()> {
        self.tx
            .send(SessionCommand::Dispatch { action })
            .await
            .context("session unavailable")
    }

    pub async fn state(&self) -> anyhow::Result<ChatState> {
        let (tx, rx) = oneshot::channel();
        self.tx
            .send(SessionCommand::GetState { reply: tx })
            .await
            .context("session unavailable")?;
        rx.await.context("session stopped")
    }
}

pub enum SessionCommand {
    Dispatch { action: Action },
    GetState { reply: oneshot::Sender<ChatState> },
}

/// Owns the chat state and is the only place that mutates it. Commands
/// arrive through the mailbox; each remote effect runs as a detached task
/// that feeds its result action back through the same mailbox, so
/// overlapping operations resolve in whatever order the network produces
/// and the reducer still sees them one at a time.
pub struct Session {
    state: ChatState,
    service: Arc<dyn AssistantService>,
    events: broadcast::Sender<ChatState>,
    tx: mpsc::Sender<SessionCommand>,
}

impl Session {
    /// Spawns the session actor and immediately starts loading the
    /// assistant. Returns the command handle and the snapshot broadcast;
    /// subscribe before relying on change notifications.
    pub fn start(
        service: Arc<dyn AssistantService>,
    ) -> (SessionHandle, broadcast::Sender<ChatState>) {
        let (tx, mut rx) = mpsc::channel::<SessionCommand>(256);
        let (events, _) = broadcast::channel::<ChatState>(256);

        let mut session = Self {
            state: ChatState::new(),
            service,
            events: events.clone(),
            tx: tx.clone(),
        };

        tokio::spawn(async move {
            session.dispatch(Action::FetchAssistant);
            while let Some(cmd) = rx.recv().await {
                session.handle(cmd);
            }
        });

        (SessionHandle { tx }, events)
    }

    fn handle(&mut self, cmd: SessionCommand) {
        match cmd {
            SessionCommand::Dispatch { action } => self.dispatch(action),
            SessionCommand::GetState { reply } => {
                let _ = reply.send(self.state.clone());
            }
        }
    }

    fn dispatch(&mut self, action: Action) {
        let effects = self.state.apply(action);
        let _ = self.events.send(self.state.clone());
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&self, effect: Effect) {
        tracing::debug!(?effect, "running remote operation");
        let service = self.service.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let action = resolve_effect(service, effect).await;
            if tx.send(SessionCommand::Dispatch { action }).await.is_err() {
                tracing::error!("session stopped before an operation resolved");
            }
        });
    }
}

async fn resolve_effect(service: Arc<dyn AssistantService>, effect: Effect) -> Action {
    match effect {
        Effect::FetchAssistant => match service.fetch_assistant().await {
            Ok(assistant) => Action::AssistantFetched { assistant },
            Err(message) => Action::AssistantFetchFailed { message },
        },
        Effect::FetchThreads { assistant_id } => match service.list_threads(assistant_id).await {
            Ok(threads) => Action::ThreadsFetched { threads },
            Err(message) => Action::ThreadsFetchFailed { message },
        },
        Effect::FetchMessages {
            assistant_id,
            thread_id,
        } => match service.list_messages(assistant_id, thread_id).await {
            Ok(messages) => Action::MessagesFetched { messages },
            Err(message) => Action::MessagesFetchFailed { message },
        },
        Effect::InitializeThread {
            assistant_id,
            prompt,
        } => match service.create_thread(assistant_id, prompt).await {
            Ok(started) => Action::ThreadInitialized {
                thread: started.thread,
                messages: started.messages,
            },
            Err(message) => Action::ThreadInitializeFailed { message },
        },
        Effect::SendMessage {
            assistant_id,
            thread_id,
            prompt,
        } => match service.send_message(assistant_id, thread_id, prompt).await {
            Ok(reply) => Action::MessageSent {
                thread_id: reply.thread_id,
                messages: reply.messages,
            },
            Err(message) => Action::MessageSendFailed { message },
        },
        Effect::DeleteAssistant { assistant_id } => {
            match service.delete_assistant(assistant_id).await {
                Ok(assistant) => Action::AssistantDeleted { assistant },
                Err(message) => Action::AssistantDeleteFailed { message },
            }
        }
        Effect::DeleteThread {
            assistant_id,
            thread_id,
        } => match service.delete_thread(assistant_id, thread_id).await {
            Ok(thread) => Action::ThreadDeleted { thread },
            Err(message) => Action::ThreadDeleteFailed { message },
        },
        Effect::UpdateAssistant {
            assistant_id,
            update,
        } => match service.update_assistant(assistant_id, update).await {
            Ok(assistant) => Action::AssistantUpdated { assistant },
            Err(message) => Action::AssistantUpdateFailed { message },
        },
        Effect::RenameThread {
            assistant_id,
            thread_id,
            name,
        } => match service.rename_thread(assistant_id, thread_id, name).await {
            Ok(thread) => Action::ThreadRenamed { thread },
            Err(message) => Action::ThreadRenameFailed { message },
        },
    }
}
