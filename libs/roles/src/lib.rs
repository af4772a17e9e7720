//! Roles of the keys a Polkadex authority node needs.
//!
//! Every authority carries two session keys derived from one mnemonic:
//! - `aura`: sr25519 key used for block production.
//! - `gran`: ed25519 key used for GRANDPA finality voting.
//!
//! The keys reach a node through the `author_insertKey` RPC, see [`authority::rpc`].

pub mod authority;
