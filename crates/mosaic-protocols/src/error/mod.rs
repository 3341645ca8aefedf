//! Error types for the Mosaic registry contracts.

mod component;
mod extension;

pub use component::*;
pub use extension::*;
