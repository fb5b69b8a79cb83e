//! Command implementations.

pub mod config;
pub mod next;
pub mod schedule;
