//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `guard`, `schedule`) so pages depend
//! on small focused models. Everything here is plain data and pure functions,
//! testable without a browser; signals wrap these types at the app layer.

pub mod guard;
pub mod schedule;
pub mod session;
