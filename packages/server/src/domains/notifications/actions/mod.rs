pub mod notify;

pub use notify::notify_vins;
