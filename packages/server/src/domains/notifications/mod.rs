//! Notifications domain - buyer "notify" acknowledgements (stub channel)

pub mod actions;
pub mod data;
pub mod models;

pub use data::{NotifyRequest, NotifyResponse};
pub use models::Notification;
