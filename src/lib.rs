//! Interactive effects for the Curupira site.
//!
//! `core` is platform-free and holds every behavior; the remaining modules
//! are the wasm32 shell that binds it to the DOM.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod host;
#[cfg(target_arch = "wasm32")]
mod surface;
