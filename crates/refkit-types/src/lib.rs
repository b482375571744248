//! Foundation types for refkit.
//!
//! This crate provides the value types that reference handling builds on.
//! It has no knowledge of reference names or their formatting rules.
//!
//! # Key Types
//!
//! - [`ObjectHash`] - 20-byte object identifier, hex encoded on the wire
//! - [`TypeError`] - Parse failures for the types in this crate

pub mod error;
pub mod hash;

pub use error::TypeError;
pub use hash::ObjectHash;
