//! Browser utility helpers.

pub mod credentials;
