//! This tool derives the authority keys of a mnemonic and prints them to stdout,
//! together with the `author_insertKey` requests and the chain spec line for it.
#![allow(clippy::print_stdout)]

use anyhow::Context as _;
use polkadex_keygen_roles::authority::{KeyType, Keyring};
use std::io;

fn main() -> anyhow::Result<()> {
    println!("Please enter the mnemonic phrase:");

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read line")?;

    let keyring = Keyring::ready().context("Keyring::ready()")?;
    let keys = keyring
        .derive_from_phrase(&input)
        .context("Failed to derive keys from the mnemonic")?;

    for key_type in KeyType::ALL {
        println!(
            "{} ({}): {}",
            key_type.default_id(),
            key_type.scheme(),
            keys.public_hex(key_type)
        );
    }
    for key_type in KeyType::ALL {
        let request = keys.insert_key_request(key_type, key_type.default_id());
        println!("{}", request.to_json().context("InsertKeyRequest::to_json()")?);
    }
    println!("{}", keys.registration_line());
    Ok(())
}
