//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expiry sweeper: removes expired cached pages at configured intervals

mod sweeper;

pub use sweeper::spawn_expiry_sweeper;
