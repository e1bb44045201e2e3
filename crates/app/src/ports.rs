//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! Futures returned by the API ports are not required to be `Send`: browser
//! fetch futures are bound to the UI thread.

pub mod api;
pub mod navigator;
pub mod token_store;

pub use api::{AuthApi, EquipmentApi, MaintenanceApi};
pub use navigator::{Navigator, Page};
pub use token_store::TokenStore;
