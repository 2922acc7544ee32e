use crate::ClientConfig;
use async_trait::async_trait;
use scribe_api as wire;
use scribe_domain::{
    Assistant, AssistantId, AssistantService, AssistantUpdate, Message, MessageId, MessageValue,
    Role, StartedThread, Thread, ThreadId, ThreadReply,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// `AssistantService` over HTTP. Transport failures and error bodies are
/// flattened into the display-ready message string the state layer expects.
pub struct HttpAssistantService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAssistantService {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    async fn patch_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let response = self
            .client
            .patch(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let response = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, String> {
    if !response.status().is_success() {
        return Err(error_message(response).await);
    }
    response.json::<T>().await.map_err(transport_error)
}

/// Prefers the body's own text (`message`, then FastAPI's `detail`) and
/// falls back to the status line when the body is absent or not JSON.
async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    let fallback = format!("request failed with status {status}");
    match response.json::<wire::ErrorBody>().await {
        Ok(body) => body.message.or(body.detail).unwrap_or(fallback),
        Err(_) => fallback,
    }
}

fn transport_error(error: reqwest::Error) -> String {
    error.to_string()
}

fn assistant_from_wire(assistant: wire::Assistant) -> Assistant {
    Assistant {
        id: AssistantId::new(assistant.id.0),
        name: assistant.name,
        created_at: assistant.created_at,
        instructions: assistant.instructions,
        model: assistant.model,
    }
}

fn thread_from_wire(thread: wire::Thread) -> Thread {
    Thread {
        id: ThreadId::new(thread.id.0),
        name: thread.name,
        assistant_id: AssistantId::new(thread.assistant_id.0),
        created_at: thread.created_at,
    }
}

fn message_from_wire(message: wire::Message) -> Message {
    Message {
        id: MessageId::new(message.id.0),
        role: match message.role {
            wire::Role::Assistant => Role::Assistant,
            wire::Role::User => Role::User,
        },
        created_at: message.created_at,
        value: match message.value {
            wire::MessageValue::Text { message } => MessageValue::Text { message },
        },
    }
}

fn messages_from_wire(messages: Vec<wire::Message>) -> Vec<Message> {
    messages.into_iter().map(message_from_wire).collect()
}

#[async_trait]
impl AssistantService for HttpAssistantService {
    async fn fetch_assistant(&self) -> Result<Assistant, String> {
        let response: wire::AssistantResponse = self.get_json("/").await?;
        Ok(assistant_from_wire(response.assistant))
    }

    async fn list_threads(&self, assistant_id: AssistantId) -> Result<Vec<Thread>, String> {
        let response: wire::ThreadsResponse = self
            .get_json(&format!("/{assistant_id}/threads"))
            .await?;
        Ok(response.threads.into_iter().map(thread_from_wire).collect())
    }

    async fn list_messages(
        &self,
        assistant_id: AssistantId,
        thread_id: ThreadId,
    ) -> Result<Vec<Message>, String> {
        let response: wire::MessagesResponse = self
            .get_json(&format!("/{assistant_id}/threads/{thread_id}/messages"))
            .await?;
        Ok(messages_from_wire(response.messages))
    }

    async fn create_thread(
        &self,
        assistant_id: AssistantId,
        message: String,
    ) -> Result<StartedThread, String> {
        let body = wire::CreateThreadRequest { message };
        let response: wire::CreateThreadResponse = self
            .post_json(&format!("/{assistant_id}/threads"), &body)
            .await?;
        Ok(StartedThread {
            thread: thread_from_wire(response.thread),
            messages: messages_from_wire(response.messages),
        })
    }

    async fn send_message(
        &self,
        assistant_id: AssistantId,
        thread_id: ThreadId,
        message: String,
    ) -> Result<ThreadReply, String> {
        let body = wire::SendMessageRequest { message };
        let response: wire::SendMessageResponse = self
            .post_json(
                &format!("/{assistant_id}/threads/{thread_id}/messages"),
                &body,
            )
            .await?;
        Ok(ThreadReply {
            thread_id: ThreadId::new(response.thread_id.0),
            messages: messages_from_wire(response.messages),
        })
    }

    async fn delete_assistant(&self, assistant_id: AssistantId) -> Result<Assistant, String> {
        let response: wire::DeleteAssistantResponse =
            self.delete_json(&format!("/{assistant_id}")).await?;
        Ok(assistant_from_wire(response.assistant))
    }

    async fn delete_thread(
        &self,
        assistant_id: AssistantId,
        thread_id: ThreadId,
    ) -> Result<Thread, String> {
        let response: wire::DeleteThreadResponse = self
            .delete_json(&format!("/{assistant_id}/threads/{thread_id}"))
            .await?;
        Ok(thread_from_wire(response.thread))
    }

    async fn update_assistant(
        &self,
        assistant_id: AssistantId,
        update: AssistantUpdate,
    ) -> Result<Assistant, String> {
        let body = wire::UpdateAssistantRequest {
            name: update.name,
            instructions: update.instructions,
            model: update.model,
        };
        let response: wire::UpdateAssistantResponse = self
            .patch_json(&format!("/{assistant_id}"), &body)
            .await?;
        Ok(assistant_from_wire(response.assistant))
    }

    async fn rename_thread(
        &self,
        assistant_id: AssistantId,
        thread_id: ThreadId,
        name: String,
    ) -> Result<Thread, String> {
        let body = wire::UpdateThreadRequest { name };
        let response: wire::UpdateThreadResponse = self
            .patch_json(&format!("/{assistant_id}/threads/{thread_id}"), &body)
            .await?;
        Ok(thread_from_wire(response.thread))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::{delete, get, patch, post};
    use axum::{Json, Router};
    use tokio::net::TcpListener;

    async fn serve(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn service(base_url: String) -> HttpAssistantService {
        HttpAssistantService::new(ClientConfig { base_url })
    }

    fn assistant_json() -> serde_json::Value {
        serde_json::json!({
            "id": "asst-1",
            "name": "Coding assistant",
            "created_at": "2024-05-01T12:00:00Z",
            "instructions": "You help with code.",
            "model": "gpt-4"
        })
    }

    fn thread_json(id: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": "New chat",
            "assistant_id": "asst-1",
            "created_at": "2024-05-02T08:30:00Z"
        })
    }

    fn message_json(id: &str, text: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "role": "assistant",
            "created_at": "2024-05-02T08:31:00Z",
            "value": {"type": "text", "content": {"message": text}}
        })
    }

    #[tokio::test]
    async fn fetch_assistant_maps_the_payload() {
        let app = Router::new().route(
            "/",
            get(|| async { Json(serde_json::json!({"assistant": assistant_json()})) }),
        );
        let base = serve(app).await;

        let assistant = service(base).fetch_assistant().await.unwrap();
        assert_eq!(assistant.id.as_str(), "asst-1");
        assert_eq!(assistant.model, "gpt-4");
    }

    #[tokio::test]
    async fn list_threads_hits_the_assistant_scope() {
        let app = Router::new().route(
            "/{assistant_id}/threads",
            get(|Path(assistant_id): Path<String>| async move {
                assert_eq!(assistant_id, "asst-1");
                Json(serde_json::json!({"threads": [thread_json("t1"), thread_json("t2")]}))
            }),
        );
        let base = serve(app).await;

        let threads = service(base)
            .list_threads(AssistantId::new("asst-1"))
            .await
            .unwrap();
        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].assistant_id.as_str(), "asst-1");
    }

    #[tokio::test]
    async fn create_thread_posts_the_prompt_and_maps_the_reply() {
        let app = Router::new().route(
            "/{assistant_id}/threads",
            post(
                |Path(assistant_id): Path<String>, Json(body): Json<serde_json::Value>| async move {
                    assert_eq!(assistant_id, "asst-1");
                    assert_eq!(body, serde_json::json!({"message": "fix this bug"}));
                    Json(serde_json::json!({
                        "thread": thread_json("t-new"),
                        "messages": [message_json("m1", "On it.")]
                    }))
                },
            ),
        );
        let base = serve(app).await;

        let started = service(base)
            .create_thread(AssistantId::new("asst-1"), "fix this bug".to_owned())
            .await
            .unwrap();
        assert_eq!(started.thread.id.as_str(), "t-new");
        assert_eq!(started.messages.len(), 1);
        assert_eq!(started.messages[0].value.text(), Some("On it."));
    }

    #[tokio::test]
    async fn rename_thread_patches_the_name() {
        let app = Router::new().route(
            "/{assistant_id}/threads/{thread_id}",
            patch(
                |Path((_, thread_id)): Path<(String, String)>,
                 Json(body): Json<serde_json::Value>| async move {
                    assert_eq!(thread_id, "t1");
                    assert_eq!(body, serde_json::json!({"name": "Bug fix"}));
                    let mut thread = thread_json("t1");
                    thread["name"] = serde_json::json!("Bug fix");
                    Json(serde_json::json!({"thread": thread}))
                },
            ),
        );
        let base = serve(app).await;

        let thread = service(base)
            .rename_thread(
                AssistantId::new("asst-1"),
                ThreadId::new("t1"),
                "Bug fix".to_owned(),
            )
            .await
            .unwrap();
        assert_eq!(thread.name, "Bug fix");
    }

    #[tokio::test]
    async fn error_detail_is_surfaced_as_the_message() {
        let app = Router::new().route(
            "/{assistant_id}/threads/{thread_id}",
            delete(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(serde_json::json!({"detail": "thread not found"})),
                )
            }),
        );
        let base = serve(app).await;

        let err = service(base)
            .delete_thread(AssistantId::new("asst-1"), ThreadId::new("missing"))
            .await
            .unwrap_err();
        assert_eq!(err, "thread not found");
    }

    #[tokio::test]
    async fn error_message_field_wins_over_detail() {
        let app = Router::new().route(
            "/",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"message": "boom", "detail": "ignored"})),
                )
            }),
        );
        let base = serve(app).await;

        let err = service(base).fetch_assistant().await.unwrap_err();
        assert_eq!(err, "boom");
    }

    #[tokio::test]
    async fn non_json_errors_fall_back_to_the_status() {
        let app = Router::new().route(
            "/",
            get(|| async { (StatusCode::BAD_GATEWAY, "upstream oops") }),
        );
        let base = serve(app).await;

        let err = service(base).fetch_assistant().await.unwrap_err();
        assert!(err.contains("502"), "unexpected error: {err}");
    }
}
