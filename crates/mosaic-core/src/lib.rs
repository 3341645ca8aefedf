//! # Mosaic Core
//!
//! Registry core for composable desktop shells.
//!
//! ## Components
//!
//! - [`ComponentRegistry`] - Directory of view components queried by
//!   role, location, and workspace mode
//! - [`ExtensionRegistry`] - Ordered, uniquely-named behavior hooks for
//!   one extension point, with debounced change notification
//! - [`notify`] - Listener list and debounced trigger primitives
//!
//! Registries are plain `Send + Sync` values. An application constructs
//! them at its composition root and hands references to packages, which
//! register during activation and unregister during deactivation.

pub mod component;
pub mod config;
pub mod extension;
pub mod notify;

pub use component::ComponentRegistry;
pub use config::RegistryConfig;
pub use extension::ExtensionRegistry;
pub use notify::{Debouncer, Listeners, Subscription};
