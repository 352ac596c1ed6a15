//! Base44 Client Bindings
//!
//! Typed access to the Base44 JavaScript SDK from Leptos/WASM frontends.
//!
//! The host page loads the SDK module; [`connect`] creates the client
//! (`createClient({ appId })`) and exposes it as `window.base44`. Every binding
//! here resolves that object at call time, so a missing client surfaces as
//! [`Base44Error::NotInitialized`] rather than a panic.

mod bootstrap;
mod error;
mod js;

pub mod auth;
pub mod entities;
pub mod functions;
pub mod integrations;

pub use bootstrap::connect;
pub use entities::{Entity, Sort};
pub use error::Base44Error;

/// Result alias for all SDK calls
pub type Result<T> = std::result::Result<T, Base44Error>;
