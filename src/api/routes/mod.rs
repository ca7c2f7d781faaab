//! API Routes
//!
//! Route handlers organized by functionality.

pub mod courses;
pub mod dashboard;
pub mod health;
