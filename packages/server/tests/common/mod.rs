// Common test utilities
#![allow(dead_code)]

pub mod api;
pub mod fixtures;
pub mod harness;

pub use api::*;
pub use fixtures::*;
pub use harness::*;
