//! Entity structs for onboarding workflows.
//!
//! Each entity mirrors a record in the external data store. The data store owns
//! creation and deletion; this crate only reads state and proposes gate status
//! writes. All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so a
//! workflow snapshot can be round-tripped and schema-checked.

mod checklist_item;
mod gate;
mod module;
mod step;
mod workflow;

pub use checklist_item::ChecklistItem;
pub use gate::Gate;
pub use module::Module;
pub use step::Step;
pub use workflow::Workflow;
