//! Workflow lookups, mutations, and module progression.
//!
//! These are the operations the UI layer triggers against a workflow
//! snapshot: move a step, tick a checklist item, recompute or override a gate,
//! and advance to the next module. None of them persist anything; the caller
//! writes the snapshot back and records the returned details in the trail.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::advance::{blocking_reason, can_advance_module};
use crate::audit_detail::{AdvancedDetail, StatusChangedDetail, StepMovedDetail, ToggledDetail};
use crate::entities::{Module, Step, Workflow};
use crate::enums::{EntityType, GateOverride, RecomputeTrigger, StepStatus};
use crate::errors::CoreError;
use crate::gate::GateValidation;
use crate::policy::{GateRecompute, RecomputePolicy};
use crate::responses::{ModuleSummary, WorkflowStatusResponse};

/// A gate recompute together with the status change it wrote, if any.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GateWrite {
    pub module_id: String,
    pub gate_id: String,
    pub recompute: GateRecompute,
    pub change: Option<StatusChangedDetail>,
}

impl Workflow {
    /// Reject snapshots with duplicate ids, which would make lookups ambiguous.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first duplicate found.
    pub fn check_integrity(&self) -> Result<(), CoreError> {
        let mut seen = HashSet::new();
        for module in &self.modules {
            if !seen.insert(("module", module.id.as_str())) {
                return Err(duplicate(EntityType::Module, &module.id));
            }
            if let Some(gate) = &module.gate
                && !seen.insert(("gate", gate.id.as_str()))
            {
                return Err(duplicate(EntityType::Gate, &gate.id));
            }
            for step in &module.steps {
                if !seen.insert(("step", step.id.as_str())) {
                    return Err(duplicate(EntityType::Step, &step.id));
                }
                for item in &step.checklist {
                    if !seen.insert(("checklist_item", item.id.as_str())) {
                        return Err(duplicate(EntityType::ChecklistItem, &item.id));
                    }
                }
            }
        }
        Ok(())
    }

    /// Modules by position, list order breaking ties.
    #[must_use]
    pub fn ordered_modules(&self) -> Vec<&Module> {
        let mut modules: Vec<&Module> = self.modules.iter().collect();
        modules.sort_by_key(|module| module.position);
        modules
    }

    /// The module being worked on. Falls back to the first module when
    /// `current_module` is unset or stale.
    #[must_use]
    pub fn current(&self) -> Option<&Module> {
        self.current_module
            .as_deref()
            .and_then(|id| self.modules.iter().find(|module| module.id == id))
            .or_else(|| self.ordered_modules().into_iter().next())
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no module has this id.
    pub fn module(&self, id: &str) -> Result<&Module, CoreError> {
        self.modules
            .iter()
            .find(|module| module.id == id)
            .ok_or_else(|| CoreError::not_found(EntityType::Module, id))
    }

    fn module_mut(&mut self, id: &str) -> Result<&mut Module, CoreError> {
        self.modules
            .iter_mut()
            .find(|module| module.id == id)
            .ok_or_else(|| CoreError::not_found(EntityType::Module, id))
    }

    /// Find a step and the module that owns it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no step has this id.
    pub fn step(&self, id: &str) -> Result<(&Module, &Step), CoreError> {
        self.modules
            .iter()
            .find_map(|module| {
                module
                    .steps
                    .iter()
                    .find(|step| step.id == id)
                    .map(|step| (module, step))
            })
            .ok_or_else(|| CoreError::not_found(EntityType::Step, id))
    }

    /// Move a step to another board column.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no step has this id.
    pub fn set_step_status(
        &mut self,
        step_id: &str,
        status: StepStatus,
    ) -> Result<StepMovedDetail, CoreError> {
        for module in &mut self.modules {
            if let Some(step) = module.steps.iter_mut().find(|step| step.id == step_id) {
                let from = step.status;
                step.status = status;
                tracing::debug!(step = step_id, %from, to = %status, "step moved");
                return Ok(StepMovedDetail {
                    module_id: module.id.clone(),
                    from,
                    to: status,
                });
            }
        }
        Err(CoreError::not_found(EntityType::Step, step_id))
    }

    /// Tick or untick a checklist item.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no checklist item has this id.
    pub fn toggle_checklist_item(
        &mut self,
        item_id: &str,
        actor: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<ToggledDetail, CoreError> {
        for module in &mut self.modules {
            for step in &mut module.steps {
                if let Some(item) = step.checklist.iter_mut().find(|item| item.id == item_id) {
                    let is_completed = item.toggle(actor, now);
                    tracing::debug!(item = item_id, is_completed, "checklist item toggled");
                    return Ok(ToggledDetail {
                        module_id: module.id.clone(),
                        step_id: step.id.clone(),
                        is_completed,
                        completed_by: item.completed_by.clone(),
                    });
                }
            }
        }
        Err(CoreError::not_found(EntityType::ChecklistItem, item_id))
    }

    /// Recompute a module's gate and store the result when policy allows.
    ///
    /// Returns `None` for a module without a gate.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no module has this id, or
    /// `CoreError::InvalidTransition` if the outcome is not an automatic edge.
    pub fn recompute_module_gate(
        &mut self,
        module_id: &str,
        trigger: RecomputeTrigger,
        policy: RecomputePolicy,
        now: DateTime<Utc>,
    ) -> Result<Option<GateWrite>, CoreError> {
        let module = self.module_mut(module_id)?;
        let Some(gate) = module.gate.as_mut() else {
            return Ok(None);
        };

        let recompute = policy.recompute(gate, &module.steps, trigger);
        let change = gate.apply_recompute(&recompute, now)?;
        Ok(Some(GateWrite {
            module_id: module_id.to_string(),
            gate_id: gate.id.clone(),
            recompute,
            change,
        }))
    }

    /// Apply a manual override to a module's gate.
    ///
    /// Returns the gate id and the change, `None` when the gate already held
    /// the target status as a manual decision.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the module does not exist or has no gate.
    pub fn override_module_gate(
        &mut self,
        module_id: &str,
        action: GateOverride,
        reason: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<(String, Option<StatusChangedDetail>), CoreError> {
        let module = self.module_mut(module_id)?;
        let gate = module
            .gate
            .as_mut()
            .ok_or_else(|| CoreError::not_found(EntityType::Gate, module_id))?;
        let change = gate.apply_override(action, reason, now)?;
        Ok((gate.id.clone(), change))
    }

    /// Validations for each of the module's gates, in gate order.
    #[must_use]
    pub fn module_validations(module: &Module, policy: RecomputePolicy) -> Vec<GateValidation> {
        module
            .gates()
            .iter()
            .map(|gate| policy.effective_validation(gate, &module.steps))
            .collect()
    }

    /// Move past the current module if its gates allow it.
    ///
    /// From the last module the workflow is marked completed and stays on
    /// that module.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::AdvanceBlocked` with the blocking message when a
    /// gate holds the module, `CoreError::Validation` if the workflow has no
    /// modules or is already completed.
    pub fn advance(&mut self, policy: RecomputePolicy) -> Result<AdvancedDetail, CoreError> {
        if self.completed {
            return Err(CoreError::Validation(format!(
                "workflow {} is already completed",
                self.id
            )));
        }

        let ordered = self.ordered_modules();
        let current = self
            .current()
            .ok_or_else(|| CoreError::Validation(format!("workflow {} has no modules", self.id)))?;

        let validations = Self::module_validations(current, policy);
        if !can_advance_module(current.gates(), &validations) {
            let reason = blocking_reason(current.gates(), &validations)
                .map_or_else(|| String::from("gate not passed"), |reason| reason.message);
            return Err(CoreError::AdvanceBlocked {
                module: current.id.clone(),
                reason,
            });
        }

        let index = ordered
            .iter()
            .position(|module| module.id == current.id)
            .unwrap_or_default();
        let from_module = current.id.clone();
        let next = ordered.get(index + 1).map(|module| module.id.clone());

        let detail = AdvancedDetail {
            from_module: from_module.clone(),
            to_module: next.clone(),
            completed: next.is_none(),
        };

        self.completed = next.is_none();
        self.current_module = Some(next.unwrap_or(from_module));
        tracing::info!(
            workflow = %self.id,
            from = %detail.from_module,
            to = ?detail.to_module,
            completed = detail.completed,
            "module advanced"
        );
        Ok(detail)
    }

    /// Per-module status overview.
    #[must_use]
    pub fn status_report(&self, policy: RecomputePolicy) -> WorkflowStatusResponse {
        let current = self.current().map(|module| module.id.clone());
        let modules = self
            .ordered_modules()
            .into_iter()
            .map(|module| {
                let validations = Self::module_validations(module, policy);
                ModuleSummary {
                    id: module.id.clone(),
                    name: module.name.clone(),
                    position: module.position,
                    status: module.derived_status(),
                    gate_status: module.gate.as_ref().map(crate::entities::Gate::current_status),
                    steps_satisfied: module.satisfied_steps(),
                    steps_total: module.steps.len(),
                    advanceable: can_advance_module(module.gates(), &validations),
                    blocking_reason: blocking_reason(module.gates(), &validations)
                        .map(|reason| reason.message),
                    current: current.as_deref() == Some(module.id.as_str()),
                }
            })
            .collect();

        WorkflowStatusResponse {
            workflow_id: self.id.clone(),
            name: self.name.clone(),
            client_id: self.client_id.clone(),
            current_module: current,
            completed: self.completed,
            modules,
        }
    }
}

fn duplicate(entity_type: EntityType, id: &str) -> CoreError {
    CoreError::Validation(format!("duplicate {entity_type} id '{id}'"))
}
