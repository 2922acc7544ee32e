mod config;
pub use config::{BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL};

mod http;
pub use http::HttpAssistantService;

mod session;
pub use session::{Session, SessionCommand, SessionHandle};
