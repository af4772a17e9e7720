//! Random mnemonic material, intended for use in testing

use super::{MiniSecret, Mnemonic, MINI_SECRET_LENGTH};
use bip39::Language;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

/// BIP-39 phrase for 16 zero bytes of entropy.
pub const ZERO_PHRASE: &str = "abandon abandon abandon abandon abandon abandon abandon \
                              abandon abandon abandon abandon about";
/// PBKDF2-HMAC-SHA512(entropy = [0; 16], salt = "mnemonic", 2048)[..32].
pub const ZERO_MINI_SECRET: &str =
    "4ed8d4b17698ddeaa1f1559f152f87b5d472f725ca86d341bd0276f1b61197e2";

/// Generates a random 12 word Mnemonic. This is meant for testing purposes:
/// unlike `Mnemonic::generate` it can be driven by a seeded rng.
impl Distribution<Mnemonic> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Mnemonic {
        let entropy: [u8; 16] = rng.gen();
        Mnemonic::new(bip39::Mnemonic::from_entropy_in(Language::English, &entropy).unwrap())
    }
}

/// Generates a random MiniSecret. This is meant for testing purposes.
impl Distribution<MiniSecret> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MiniSecret {
        MiniSecret::from_bytes(rng.gen::<[u8; MINI_SECRET_LENGTH]>())
    }
}
