//! # docchat
//!
//! Leptos + WASM single-page client for chatting with uploaded documents.
//!
//! The crate holds the view layer, the session state (documents, per-document
//! chat history, active selection), the HTTP gateway to the document-chat
//! backend, and the browser persistence port. All document processing and
//! model inference live behind the backend's HTTP contract.
//!
//! Browser-only code is gated on the `csr` feature; native builds compile
//! stubs so the state and formatting logic can be tested with `cargo test`.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
