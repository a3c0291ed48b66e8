//! Configuration components
//!
//! Simple, focused configuration for the pieces that actually need it.

pub mod instructions;
pub mod logging;

pub use instructions::*;
pub use logging::*;
