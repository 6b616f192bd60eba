//! Reusable view components for the teacher portal.

pub mod navbar;
pub mod protected;
pub mod schedule_grid;
