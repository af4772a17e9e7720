//! Entry point for deriving authority keys.

use super::AuthorityKeySet;
use polkadex_keygen_crypto::{
    ed25519,
    mnemonic::{MiniSecret, Mnemonic, MnemonicError, MINI_SECRET_LENGTH},
    sr25519,
};
use rand::RngCore as _;

const SELF_TEST_MSG: &[u8] = b"polkadex keygen self-test";

/// The cryptographic subsystem failed to become ready.
#[derive(Debug, thiserror::Error)]
pub enum CryptoInitError {
    /// The OS entropy source could not be read.
    #[error("entropy source unavailable")]
    Entropy(#[source] rand::Error),
    /// A scheme produced a signature it could not verify.
    #[error("{scheme} self-test failed: {reason}")]
    SelfTest {
        /// Scheme under test.
        scheme: &'static str,
        /// What went wrong.
        reason: String,
    },
}

/// Keys could not be derived from a mnemonic.
#[derive(Debug, thiserror::Error)]
pub enum KeyDerivationError {
    /// Empty or malformed phrase.
    #[error("invalid mnemonic")]
    InvalidMnemonic(#[source] MnemonicError),
    /// The scheme rejected the mini secret.
    #[error("{scheme} key derivation failed: {reason}")]
    Scheme {
        /// Scheme which failed.
        scheme: &'static str,
        /// What went wrong.
        reason: String,
    },
}

/// Failure to produce a fresh authority key set.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// No mnemonic could be generated; a weak one is never substituted.
    #[error("mnemonic generation failed")]
    MnemonicGeneration(#[source] MnemonicError),
    /// Keys could not be derived from the generated mnemonic.
    #[error(transparent)]
    KeyDerivation(#[from] KeyDerivationError),
}

/// Initialized cryptographic subsystem. Deriving keys requires a `Keyring`, and
/// the only way to get one is [`Keyring::ready`], so no derivation can happen
/// before the readiness checks have passed.
///
/// Each scheme is driven by its own adapter; the ed25519 key is never derived
/// through the sr25519 one.
#[derive(Debug)]
pub struct Keyring {
    _ready: (),
}

impl Keyring {
    /// Probes the OS entropy source and checks that both schemes can sign and
    /// verify with a freshly derived key.
    #[tracing::instrument(level = "debug")]
    pub fn ready() -> Result<Self, CryptoInitError> {
        let mut seed = [0u8; MINI_SECRET_LENGTH];
        rand::rngs::OsRng
            .try_fill_bytes(&mut seed)
            .map_err(CryptoInitError::Entropy)?;
        let secret = MiniSecret::from_bytes(seed);

        let sr = sr25519::SecretKey::from_mini_secret(&secret).map_err(|err| {
            CryptoInitError::SelfTest {
                scheme: "sr25519",
                reason: format!("{err:#}"),
            }
        })?;
        sr.public()
            .verify(SELF_TEST_MSG, &sr.sign(SELF_TEST_MSG))
            .map_err(|err| CryptoInitError::SelfTest {
                scheme: "sr25519",
                reason: err.to_string(),
            })?;

        let ed = ed25519::SecretKey::from_mini_secret(&secret);
        ed.public()
            .verify(SELF_TEST_MSG, &ed.sign(SELF_TEST_MSG))
            .map_err(|err| CryptoInitError::SelfTest {
                scheme: "ed25519",
                reason: err.to_string(),
            })?;

        tracing::debug!("crypto subsystem ready");
        Ok(Self { _ready: () })
    }

    /// Generates a fresh mnemonic of `word_count` words and derives both keys from it.
    pub fn generate(&self, word_count: usize) -> Result<AuthorityKeySet, GenerationError> {
        let mnemonic =
            Mnemonic::generate(word_count).map_err(GenerationError::MnemonicGeneration)?;
        Ok(self.derive(mnemonic)?)
    }

    /// Parses `phrase` and derives both keys from it.
    pub fn derive_from_phrase(&self, phrase: &str) -> Result<AuthorityKeySet, KeyDerivationError> {
        let mnemonic = Mnemonic::from_phrase(phrase).map_err(KeyDerivationError::InvalidMnemonic)?;
        self.derive(mnemonic)
    }

    /// Derives the aura (sr25519) and gran (ed25519) keys from the same mnemonic.
    pub fn derive(&self, mnemonic: Mnemonic) -> Result<AuthorityKeySet, KeyDerivationError> {
        let secret = mnemonic.mini_secret();
        let aura = sr25519::SecretKey::from_mini_secret(&secret)
            .map_err(|err| KeyDerivationError::Scheme {
                scheme: "sr25519",
                reason: format!("{err:#}"),
            })?
            .public();
        let gran = ed25519::SecretKey::from_mini_secret(&secret).public();
        Ok(AuthorityKeySet {
            mnemonic,
            aura,
            gran,
        })
    }
}
