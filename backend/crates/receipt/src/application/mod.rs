//! Application Layer - Use Cases
//!
//! Orchestrates domain logic and the store/cache interfaces.

pub mod config;
pub mod get_points;
pub mod process_receipt;
