#![allow(dead_code)]

pub mod builders;
pub mod mocks;

pub use builders::hwmon::HwmonTreeBuilder;
pub use builders::session::FakeSessionBuilder;
pub use mocks::session::{FakeSession, SessionState};
