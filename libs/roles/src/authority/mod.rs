//! Authority role implementation.

mod keyring;
mod keys;
pub mod rpc;
pub mod testonly;

pub use keyring::*;
pub use keys::*;

#[cfg(test)]
mod tests;
