pub mod checklist;
pub mod dispatch;
pub mod gate;
pub mod module;
pub mod schema;
pub mod shared;
pub mod step;
pub mod workflow;
