mod confirmation_modal;
mod equipment_card;
mod maintenance_card;
mod modal;
mod nav;
mod notification_modal;
mod stat_card;

pub use confirmation_modal::ConfirmationModal;
pub use equipment_card::EquipmentCard;
pub use maintenance_card::MaintenanceCard;
pub use modal::Modal;
pub use nav::Nav;
pub use notification_modal::NotificationModal;
pub use stat_card::StatCard;
