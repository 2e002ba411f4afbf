//! # Engine Module
//!
//! Turns a raw option set into a bound parameter bundle.
//!
//! ## Overview
//!
//! The orchestrator runs three validation passes in a fixed order: general
//! settings (mandatory options, database presence, enzyme resolution), then
//! modification names, then every supplied option against its rule. Only when
//! all three accept the input do the binders build the typed bundle. Any refusal
//! is returned as a [`error::Rejection`] carrying one diagnostic, or all of them
//! when running in accumulate mode.
//!
//! ## Architecture
//!
//! - **Orchestration** ([`orchestrator`]) - Pass sequencing, validation modes and outcomes
//! - **Binding** ([`binder`]) - General and per-engine binders over validated options
//! - **State Tracking** ([`state`]) - The orchestrator state machine
//! - **Progress Monitoring** ([`progress`]) - Phase and task events for front ends
//! - **Error Handling** ([`error`]) - Diagnostic taxonomy, rejections and engine errors

pub mod binder;
pub mod error;
pub mod orchestrator;
pub mod progress;
pub mod state;
