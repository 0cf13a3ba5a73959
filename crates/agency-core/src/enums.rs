//! Status enums, entity types, and trail ops for onboarding workflows.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `GateStatus` carries the manual/automatic transition table used by the
//! override and recompute paths.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// StepStatus
// ---------------------------------------------------------------------------

/// Status of a step on the module board.
///
/// ```text
/// backlog → todo → doing → review → done
///                        ↘ blocked ↗
/// ```
///
/// Steps can be dragged between any two columns, so no transition table is
/// enforced. Only `done` counts as complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Backlog,
    Todo,
    Doing,
    Review,
    Done,
    Blocked,
}

impl StepStatus {
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }

    #[must_use]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }

    /// Work on the step has not been picked up yet.
    #[must_use]
    pub const fn is_unstarted(self) -> bool {
        matches!(self, Self::Backlog | Self::Todo)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Review => "review",
            Self::Done => "done",
            Self::Blocked => "blocked",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// GateStatus
// ---------------------------------------------------------------------------

/// How a gate status change was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Computed from step and checklist state.
    Automatic,
    /// A person marked the gate directly.
    Manual,
}

/// Status of a gate.
///
/// ```text
/// pending ⇄ passed          (automatic, step-driven)
///    ↘  ↙
///   blocked                 (automatic or manual)
///
/// any → failed              (manual only)
/// any → pending             (manual reset)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GateStatus {
    #[default]
    Pending,
    Passed,
    Failed,
    Blocked,
}

impl GateStatus {
    /// Valid next states from the current state for the given kind of change.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn allowed_next_states(self, kind: TransitionKind) -> &'static [Self] {
        match (kind, self) {
            (TransitionKind::Manual, Self::Pending) => &[Self::Passed, Self::Failed, Self::Blocked],
            (TransitionKind::Manual, Self::Passed) => &[Self::Pending, Self::Failed, Self::Blocked],
            (TransitionKind::Manual, Self::Failed) => &[Self::Pending, Self::Passed, Self::Blocked],
            (TransitionKind::Manual, Self::Blocked) => &[Self::Pending, Self::Passed, Self::Failed],
            (TransitionKind::Automatic, Self::Pending) => &[Self::Passed, Self::Blocked],
            (TransitionKind::Automatic, Self::Passed) => &[Self::Pending, Self::Blocked],
            (TransitionKind::Automatic, Self::Failed) => {
                &[Self::Pending, Self::Passed, Self::Blocked]
            }
            (TransitionKind::Automatic, Self::Blocked) => &[Self::Pending, Self::Passed],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self, kind: TransitionKind) -> bool {
        self.allowed_next_states(kind).contains(&next)
    }

    /// A status a person set that automatic recomputes must not clobber.
    #[must_use]
    pub const fn is_manual_hold(self) -> bool {
        matches!(self, Self::Failed | Self::Blocked)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Blocked => "blocked",
        }
    }
}

impl fmt::Display for GateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// GateOverride
// ---------------------------------------------------------------------------

/// Manual actions a person can take on a gate from the module view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GateOverride {
    MarkPassed,
    MarkFailed,
    Block,
    Reset,
}

impl GateOverride {
    /// The status this override writes.
    #[must_use]
    pub const fn target(self) -> GateStatus {
        match self {
            Self::MarkPassed => GateStatus::Passed,
            Self::MarkFailed => GateStatus::Failed,
            Self::Block => GateStatus::Blocked,
            Self::Reset => GateStatus::Pending,
        }
    }

    #[must_use]
    pub const fn from_target(status: GateStatus) -> Self {
        match status {
            GateStatus::Passed => Self::MarkPassed,
            GateStatus::Failed => Self::MarkFailed,
            GateStatus::Blocked => Self::Block,
            GateStatus::Pending => Self::Reset,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MarkPassed => "mark_passed",
            Self::MarkFailed => "mark_failed",
            Self::Block => "block",
            Self::Reset => "reset",
        }
    }
}

impl fmt::Display for GateOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ModuleStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a module, derived from its steps. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    NotStarted,
    InProgress,
    Blocked,
    Done,
}

impl ModuleStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Blocked => "blocked",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RecomputeTrigger
// ---------------------------------------------------------------------------

/// What caused a gate recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecomputeTrigger {
    /// Side effect of a step or checklist mutation.
    Automatic,
    /// A person asked for the gate to be recalculated.
    Explicit,
}

impl RecomputeTrigger {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Automatic => "automatic",
            Self::Explicit => "explicit",
        }
    }
}

impl fmt::Display for RecomputeTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Entity types referenced by trail operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Workflow,
    Module,
    Step,
    ChecklistItem,
    Gate,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Workflow => "workflow",
            Self::Module => "module",
            Self::Step => "step",
            Self::ChecklistItem => "checklist_item",
            Self::Gate => "gate",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TrailOp
// ---------------------------------------------------------------------------

/// Kind of write recorded in the gate trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TrailOp {
    /// Gate status written from a fresh validation.
    Recompute,
    /// Gate status written by a person.
    Override,
    /// Step status changed.
    StepStatus,
    /// Checklist item toggled.
    Toggle,
    /// Workflow moved to the next module.
    Advance,
}

impl TrailOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recompute => "recompute",
            Self::Override => "override",
            Self::StepStatus => "step_status",
            Self::Toggle => "toggle",
            Self::Advance => "advance",
        }
    }
}

impl fmt::Display for TrailOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
