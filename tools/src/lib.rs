//! Bulk generation of authority keys for Polkadex nodes.
mod config;
mod generator;
mod output;


pub use config::*;
pub use generator::*;
pub use output::write_atomic;
