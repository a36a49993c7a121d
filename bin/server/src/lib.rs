//! Praktijk Lichtpunt website.
//!
//! This crate provides the Leptos application shared by the server and the
//! hydrated browser bundle, plus the axum endpoints that live outside the
//! router.

#![allow(non_snake_case)]

pub mod app;
pub mod components;
pub mod pages;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;
#[cfg(feature = "ssr")]
pub mod routes;
#[cfg(feature = "ssr")]
pub mod services;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
