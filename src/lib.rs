//! Content-driven renderer for a small multi-page informational site.
//!
//! The content document (`content.json`) drives every rendered string, link
//! and image; if the fetch fails, a compiled-in fallback with the same shape
//! takes its place. Everything below the DOM layer is plain Rust and tests on
//! the host.
//!
//! This crate is intentionally a stub by default so it builds on native
//! targets without requiring a wasm toolchain. Enable the real browser app
//! with `--features web` (and a wasm32 target).

pub mod content;
pub mod hero;
pub mod loader;
pub mod markdown;
pub mod render;
pub mod router;
pub mod slots;

/// Placeholder function for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {
    // No-op.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
