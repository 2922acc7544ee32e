mod assistant;
mod ids;
mod message;
mod operation;
mod session;
mod thread;

pub use assistant::{Assistant, AssistantUpdate};
pub use ids::{AssistantId, MessageId, ThreadId};
pub use message::{Message, MessageList, MessageValue, Role};
pub use operation::{OperationState, OperationStatus};
pub use session::ChatState;
pub use thread::{Thread, ThreadList};
