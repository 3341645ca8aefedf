//! # Mosaic Protocols
//!
//! Contract layer for the Mosaic registry core.
//!
//! ## Components
//!
//! - [`ViewComponent`] - Trait implemented by registrable view descriptors
//! - [`Extension`] - Trait implemented by behavior-hook objects
//! - [`Descriptor`] / [`Location`] - Declarative placement of views
//! - Error types for both registries

pub mod component;
pub mod descriptor;
pub mod error;
pub mod extension;

pub use component::{ContainerStyles, ViewComponent};
pub use descriptor::{Descriptor, Location};
pub use error::{ComponentError, ExtensionError};
pub use extension::Extension;
