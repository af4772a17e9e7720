//! BIP-39 mnemonic phrases and the mini secret derived from them.
//!
//! The derivation follows Substrate (and polkadot-js): the mnemonic's raw
//! entropy, not the phrase, is fed to PBKDF2-HMAC-SHA512 with the salt
//! `"mnemonic" || password`, and the first 32 bytes of the output become the
//! mini secret shared by every signature scheme.

use bip39::Language;
use rand::RngCore as _;
use sha2::Sha512;
use std::fmt;
use zeroize::Zeroizing;

pub mod testonly;

#[cfg(test)]
mod tests;

/// Length of the seed every key pair is derived from.
pub const MINI_SECRET_LENGTH: usize = 32;
/// Word count used when nothing else is configured. Matches `mnemonicGenerate()`.
pub const DEFAULT_WORD_COUNT: usize = 12;
/// Word counts defined by BIP-39.
pub const WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

const PBKDF2_ROUNDS: u32 = 2048;
const PBKDF2_OUTPUT_LENGTH: usize = 64;
const SALT_PREFIX: &str = "mnemonic";

/// Errors produced while generating or parsing a mnemonic.
#[derive(Debug, thiserror::Error)]
pub enum MnemonicError {
    /// Word count not defined by BIP-39.
    #[error("unsupported word count {0}, expected 12, 15, 18, 21 or 24")]
    WordCount(usize),
    /// The OS entropy source failed.
    #[error("entropy source unavailable")]
    Entropy(#[source] rand::Error),
    /// Unknown word, bad checksum or bad length.
    #[error("invalid mnemonic phrase")]
    InvalidPhrase(#[from] bip39::Error),
}

/// Returns the entropy length in bytes for a BIP-39 word count.
pub fn entropy_length(word_count: usize) -> Result<usize, MnemonicError> {
    if !WORD_COUNTS.contains(&word_count) {
        return Err(MnemonicError::WordCount(word_count));
    }
    Ok(word_count / 3 * 4)
}

/// An English BIP-39 mnemonic phrase.
#[derive(Clone)]
pub struct Mnemonic {
    inner: bip39::Mnemonic,
    phrase: Zeroizing<String>,
}

impl Mnemonic {
    /// Generates a new mnemonic from the OS entropy source.
    pub fn generate(word_count: usize) -> Result<Self, MnemonicError> {
        let len = entropy_length(word_count)?;
        let mut entropy = Zeroizing::new([0u8; 32]);
        rand::rngs::OsRng
            .try_fill_bytes(&mut entropy[..len])
            .map_err(MnemonicError::Entropy)?;
        let inner = bip39::Mnemonic::from_entropy_in(Language::English, &entropy[..len])?;
        Ok(Self::new(inner))
    }

    /// Parses an English phrase. Surrounding whitespace is ignored.
    pub fn from_phrase(phrase: &str) -> Result<Self, MnemonicError> {
        let inner = bip39::Mnemonic::parse_in_normalized(Language::English, phrase.trim())?;
        Ok(Self::new(inner))
    }

    fn new(inner: bip39::Mnemonic) -> Self {
        let phrase = Zeroizing::new(inner.to_string());
        Self { inner, phrase }
    }

    /// The words, separated by single spaces.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Number of words in the phrase.
    pub fn word_count(&self) -> usize {
        self.inner.word_count()
    }

    /// Derives the mini secret (empty password).
    pub fn mini_secret(&self) -> MiniSecret {
        let entropy = Zeroizing::new(self.inner.to_entropy());
        let salt = SALT_PREFIX.as_bytes();
        let mut seed = Zeroizing::new([0u8; PBKDF2_OUTPUT_LENGTH]);
        pbkdf2::pbkdf2_hmac::<Sha512>(&entropy, salt, PBKDF2_ROUNDS, &mut seed[..]);

        let mut secret = MiniSecret(Zeroizing::new([0u8; MINI_SECRET_LENGTH]));
        secret.0.copy_from_slice(&seed[..MINI_SECRET_LENGTH]);
        secret
    }
}

impl PartialEq for Mnemonic {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Mnemonic {}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "<mnemonic of {} words>", self.word_count())
    }
}

/// 32-byte seed shared by the sr25519 and ed25519 derivations. Zeroed on drop.
pub struct MiniSecret(Zeroizing<[u8; MINI_SECRET_LENGTH]>);

impl MiniSecret {
    /// Wraps raw seed bytes.
    pub fn from_bytes(bytes: [u8; MINI_SECRET_LENGTH]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    /// Raw seed bytes.
    pub fn as_bytes(&self) -> &[u8; MINI_SECRET_LENGTH] {
        &self.0
    }
}

impl fmt::Debug for MiniSecret {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str("<mini secret>")
    }
}
