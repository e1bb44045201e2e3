//! # maintrack-app
//!
//! Application layer: use-cases, view-models and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `TokenStore`: persisted session token
//!   - `Navigator`: page-level navigation
//!   - `AuthApi`, `EquipmentApi`, `MaintenanceApi`: the REST backend
//! - Define **use-case services**: `Session`, `AuthService`, `DashboardService`,
//!   `EquipmentService`, `MaintenanceService`
//! - Define **view-models**: the state each page renders, with the transitions
//!   triggered by user actions and request outcomes
//!
//! ## Dependency rule
//! Depends on `maintrack-domain` only (plus `tokio` macros for joining futures).
//! Never imports adapter crates and never touches a DOM.

pub mod messages;
pub mod ports;
pub mod services;
pub mod viewmodels;
