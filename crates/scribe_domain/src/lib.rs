mod actions;
pub use actions::Action;

mod adapters;
pub use adapters::{AssistantService, StartedThread, ThreadReply};

mod effects;
pub use effects::Effect;

mod reducer;

mod state;
pub use state::*;
