//! Infrastructure layer.
//!
//! Provides technical concerns that support the adapters without containing
//! domain logic: configuration loading, logging setup and adapter wiring.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root building adapters from configuration
//! - [`config`] - Configuration loading and validation

pub mod bootstrap;
pub mod config;
