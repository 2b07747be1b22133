//! Core components of the `vanguard-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`VgClient`] and its builder.
//! - The primary [`VgError`] type.
//! - The [`FundService`] seam between transport and decoding.
//! - Internal networking and field conversion logic.

/// The main client (`VgClient`), builder, and configuration.
pub mod client;
pub(crate) mod conversions;
/// The primary error type (`VgError`) for the crate.
pub mod error;
/// Service traits for abstracting the wire transport.
pub mod services;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;
pub(crate) mod symbol;

// convenient re-exports so most code can just `use crate::core::VgClient`
pub use client::{VgClient, VgClientBuilder};
pub use error::VgError;
pub use services::FundService;

#[cfg(test)]
pub(crate) mod testing;
