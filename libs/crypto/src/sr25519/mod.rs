//! sr25519 (Schnorr over Ristretto255) signature scheme, used for block
//! production (AURA) keys. An adapter of schnorrkel, mirroring what
//! `sp_core::sr25519` does with a mini secret.

use crate::{encode_prefixed_hex, mnemonic::MiniSecret, ByteFmt, Text, TextFmt, HEX_PREFIX};
use schnorrkel::{ExpansionMode, Keypair, MiniSecretKey};
use std::fmt;


/// Length of an encoded public key.
pub const PUBLIC_KEY_LENGTH: usize = schnorrkel::PUBLIC_KEY_LENGTH;
/// Signing context used by Substrate for every sr25519 signature.
pub const SIGNING_CTX: &[u8] = b"substrate";

/// sr25519 secret key together with its public half.
pub struct SecretKey(Keypair);

impl SecretKey {
    /// Generates a secret key from a cryptographically-secure entropy source.
    pub fn generate() -> Self {
        Self(Keypair::generate_with(rand::rngs::OsRng))
    }

    /// Derives the secret key from a mnemonic's mini secret,
    /// expanding it in ed25519 mode like Substrate does.
    pub fn from_mini_secret(secret: &MiniSecret) -> anyhow::Result<Self> {
        let mini = MiniSecretKey::from_bytes(secret.as_bytes())
            .map_err(|err| anyhow::format_err!("MiniSecretKey::from_bytes(): {err}"))?;
        Ok(Self(mini.expand_to_keypair(ExpansionMode::Ed25519)))
    }

    /// Signs a message under the Substrate signing context.
    pub fn sign(&self, msg: &[u8]) -> Signature {
        Signature(self.0.sign_simple(SIGNING_CTX, msg))
    }

    /// Computes a public key for this secret key.
    pub fn public(&self) -> PublicKey {
        PublicKey(self.0.public)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "<secret for {}>", TextFmt::encode(&self.public()))
    }
}

/// sr25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey(schnorrkel::PublicKey);

impl PublicKey {
    /// Verifies a signature of a message against this public key.
    pub fn verify(&self, msg: &[u8], sig: &Signature) -> Result<(), InvalidSignatureError> {
        self.0
            .verify_simple(SIGNING_CTX, msg, &sig.0)
            .map_err(|_| InvalidSignatureError)
    }

    /// Returns the raw key bytes.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.0.to_bytes()
    }
}

impl ByteFmt for PublicKey {
    fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        schnorrkel::PublicKey::from_bytes(bytes)
            .map_err(|err| anyhow::format_err!("invalid key material: {err}"))
            .map(Self)
    }

    fn encode(&self) -> Vec<u8> {
        self.0.to_bytes().to_vec()
    }
}

impl TextFmt for PublicKey {
    fn decode(text: Text) -> anyhow::Result<Self> {
        text.strip(HEX_PREFIX)?.decode_hex()
    }

    fn encode(&self) -> String {
        encode_prefixed_hex(&self.0.to_bytes())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "sr25519:{}", TextFmt::encode(self))
    }
}

/// sr25519 signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature(schnorrkel::Signature);

impl ByteFmt for Signature {
    fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        schnorrkel::Signature::from_bytes(bytes)
            .map_err(|err| anyhow::format_err!("invalid signature encoding: {err}"))
            .map(Self)
    }

    fn encode(&self) -> Vec<u8> {
        self.0.to_bytes().to_vec()
    }
}

/// Error returned when an invalid signature is detected.
#[derive(Debug, thiserror::Error)]
#[error("invalid sr25519 signature")]
pub struct InvalidSignatureError;
