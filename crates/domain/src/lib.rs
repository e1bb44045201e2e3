//! # maintrack-domain
//!
//! Pure domain model for the maintrack equipment-maintenance tracker.
//!
//! ## Responsibilities
//! - Foundational types: backend identifiers, error conventions
//! - Define **Equipments** (tracked machines with a free-text status)
//! - Define **Maintenances** (interventions on an equipment, with a lifecycle status)
//! - Define **credentials** and their local validation rules
//! - Client-side **filters** and dashboard **counters** over in-memory snapshots
//! - The create/edit **form mode** that drives the write method and path
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod auth;
pub mod equipment;
pub mod filter;
pub mod form_mode;
pub mod maintenance;
pub mod stats;
