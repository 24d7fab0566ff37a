pub mod dispatch;
pub mod outbox;
pub mod process;
pub mod shared;
pub mod task;
