//! Business logic: billing, reporting, and the operations behind each
//! CLI command.

pub mod billing;
pub mod config;
pub mod lesson;
pub mod log;
pub mod report;
pub mod stats;
pub mod student;

pub use billing::{Billing, compute};
