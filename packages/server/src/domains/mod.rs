// Domain modules

pub mod listings;
pub mod notifications;
pub mod scoring;
pub mod vehicles;
