mod checklist;
mod gate;
mod module;
mod step;
mod workflow;

pub use checklist::ChecklistCommands;
pub use gate::GateCommands;
pub use module::ModuleCommands;
pub use step::StepCommands;
pub use workflow::WorkflowCommands;
