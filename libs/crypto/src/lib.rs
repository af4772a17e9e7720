//! Collection of cryptographic primitives used to generate authority keys.

pub use fmt::*;

pub mod ed25519;
mod fmt;
pub mod mnemonic;
pub mod sr25519;
