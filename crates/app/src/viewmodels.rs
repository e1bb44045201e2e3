//! View-models: page state and its transitions.
//!
//! A view-model never performs IO. User actions return the request to issue
//! (if any); request outcomes are fed back in. The UI adapter owns the glue.

pub mod auth;
pub mod dashboard;
pub mod equipments;
pub mod list;
pub mod maintenances;
pub mod notification;
