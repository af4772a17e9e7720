//! Test-only utilities.
use super::{AuthorityKeySet, Keyring};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

/// Derives a key set from a random mnemonic. Driven by `rng`, so seeded rngs
/// give reproducible key sets.
impl Distribution<AuthorityKeySet> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> AuthorityKeySet {
        Keyring::ready().unwrap().derive(rng.gen()).unwrap()
    }
}
