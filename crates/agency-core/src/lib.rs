//! # agency-core
//!
//! Onboarding workflow types and the gate validation engine.
//!
//! This crate provides the logic shared by every surface of the agency app:
//! - Entity structs for workflows, modules, steps, checklist items, and gates
//! - Status enums with the gate transition table
//! - The pure gate validation engine
//! - The module advancement policy and its blocking-reason selector
//! - The recompute policy that keeps manual gate statuses in place
//! - Trail operation envelope and detail payloads for JSONL audit records
//! - CLI response types

pub mod advance;
pub mod audit_detail;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod gate;
pub mod policy;
pub mod responses;
pub mod trail;
pub mod workflow;

pub use advance::{BlockingReason, blocking_reason, can_advance_module};
pub use gate::{GateValidation, validate_gate};
