//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod auth_service;
pub mod dashboard_service;
pub mod equipment_service;
pub mod maintenance_service;
pub mod session;
