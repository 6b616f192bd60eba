//! # timetable-client
//!
//! Leptos + WASM browser client for the department timetabling product.
//! The solver backend that actually assigns subjects to slots is an external
//! HTTP collaborator behind `/api`; this crate owns the teacher-facing side:
//! the session lifecycle, route gating for protected views, and the merge of
//! per-class schedules into one conflict-aware weekly grid.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: set up logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
