//! Application layer for Kanri.
//!
//! This crate provides the async task service façade consumed by the UI,
//! plus the composition root that wires storage, repository, and service.

pub mod bootstrap;
pub mod task_service;

pub use bootstrap::{bootstrap, bootstrap_at};
pub use task_service::{SimulatedNetwork, TaskService};
