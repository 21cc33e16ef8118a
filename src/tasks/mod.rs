//! Background tasks module
//!
//! This module contains background tasks that run alongside the HTTP server.

pub mod resource_monitor;

// Re-export main functions
pub use resource_monitor::resource_monitor_task;
