use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Module;

/// A client's onboarding workflow: modules worked through in position order.
///
/// Progression logic lives in [`crate::workflow`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Workflow {
    pub id: String,
    #[serde(default)]
    pub client_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub modules: Vec<Module>,
    /// Module being worked on. `None` means the first module.
    #[serde(default)]
    pub current_module: Option<String>,
    /// Set once the last module has advanced.
    #[serde(default)]
    pub completed: bool,
}
