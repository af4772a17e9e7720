//! ed25519 signature scheme, used for finality voting (GRANDPA) keys.
//! This is just an adapter of ed25519_dalek, exposing a Substrate-compatible API.

use crate::{encode_prefixed_hex, mnemonic::MiniSecret, ByteFmt, Text, TextFmt, HEX_PREFIX};
use anyhow::Context as _;
use ed::{Signer as _, Verifier as _};
use ed25519_dalek as ed;
use std::fmt;

#[cfg(test)]
mod tests;

/// Length of an encoded public key.
pub const PUBLIC_KEY_LENGTH: usize = ed::PUBLIC_KEY_LENGTH;

/// ed25519 secret key.
pub struct SecretKey(ed::SigningKey);

impl SecretKey {
    /// Generates a secret key from a cryptographically-secure entropy source.
    pub fn generate() -> Self {
        Self(ed::SigningKey::generate(&mut rand::rngs::OsRng {}))
    }

    /// Derives the secret key from a mnemonic's mini secret.
    /// The mini secret is used directly as the ed25519 seed, which is what
    /// Substrate and polkadot-js do for `ed25519` key pairs.
    pub fn from_mini_secret(secret: &MiniSecret) -> Self {
        Self(ed::SigningKey::from_bytes(secret.as_bytes()))
    }

    /// Signs a message.
    pub fn sign(&self, msg: &[u8]) -> Signature {
        Signature(self.0.sign(msg))
    }

    /// Computes a public key for this secret key.
    pub fn public(&self) -> PublicKey {
        PublicKey(self.0.verifying_key())
    }
}

impl ByteFmt for SecretKey {
    fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        let bytes: &ed::SecretKey = bytes.try_into()?;
        Ok(Self(ed::SigningKey::from_bytes(bytes)))
    }

    fn encode(&self) -> Vec<u8> {
        self.0.to_bytes().to_vec()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "<secret for {}>", TextFmt::encode(&self.public()))
    }
}

/// ed25519 public key.
#[derive(Clone)]
pub struct PublicKey(ed::VerifyingKey);

impl PublicKey {
    /// Verifies a signature of a message against this public key.
    pub fn verify(&self, msg: &[u8], sig: &Signature) -> Result<(), InvalidSignatureError> {
        self.0
            .verify(msg, &sig.0)
            .map_err(|_| InvalidSignatureError)
    }

    /// Returns a reference to the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        self.0.as_bytes()
    }
}

impl ByteFmt for PublicKey {
    fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        let bytes: &[u8; ed::PUBLIC_KEY_LENGTH] = bytes.try_into()?;
        ed::VerifyingKey::from_bytes(bytes)
            .context("invalid key material")
            .map(Self)
    }

    fn encode(&self) -> Vec<u8> {
        self.0.as_bytes().to_vec()
    }
}

impl TextFmt for PublicKey {
    fn decode(text: Text) -> anyhow::Result<Self> {
        text.strip(HEX_PREFIX)?.decode_hex()
    }

    fn encode(&self) -> String {
        encode_prefixed_hex(self.0.as_bytes())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "ed25519:{}", TextFmt::encode(self))
    }
}

impl std::hash::Hash for PublicKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write(self.0.as_bytes());
    }
}

// clippy: if Hash is implemented manually,
// then PartialEq should be implemented manually.
impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for PublicKey {}

/// ed25519 signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature(ed::Signature);

impl ByteFmt for Signature {
    fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        let bytes: &[u8; ed::SIGNATURE_LENGTH] = bytes.try_into()?;
        Ok(Self(ed::Signature::from_bytes(bytes)))
    }

    fn encode(&self) -> Vec<u8> {
        self.0.to_bytes().to_vec()
    }
}

/// Error returned when an invalid signature is detected.
#[derive(Debug, thiserror::Error)]
#[error("invalid ed25519 signature")]
pub struct InvalidSignatureError;
