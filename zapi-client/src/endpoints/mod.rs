//! # Zephyr Scale API Endpoints
//!
//! Organized endpoint implementations for the Zephyr Scale resource
//! families: test cases, test cycles, test executions, and statuses.

pub mod statuses;
pub mod test_cases;
pub mod test_cycles;
pub mod test_executions;
