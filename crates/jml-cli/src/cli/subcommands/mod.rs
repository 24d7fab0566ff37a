mod outbox;
mod process;
mod task;

pub use outbox::OutboxCommands;
pub use process::{CreateProcessArgs, ProcessCommands};
pub use task::TaskCommands;
