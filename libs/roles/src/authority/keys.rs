//! Key types and the per-node set of authority keys.

use super::rpc::InsertKeyRequest;
use polkadex_keygen_crypto::{ed25519, mnemonic::Mnemonic, sr25519, TextFmt as _};
use std::fmt;

/// Duty an authority key is used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Block production, sr25519.
    Aura,
    /// GRANDPA finality voting, ed25519.
    Gran,
}

impl KeyType {
    /// All key types, in the order they are written for a node.
    pub const ALL: [KeyType; 2] = [KeyType::Aura, KeyType::Gran];

    /// Key type id the runtime registers for this duty.
    pub fn default_id(self) -> KeyTypeId {
        match self {
            Self::Aura => KeyTypeId(*b"aura"),
            Self::Gran => KeyTypeId(*b"gran"),
        }
    }

    /// Name of the signature scheme the key lives under.
    pub fn scheme(self) -> &'static str {
        match self {
            Self::Aura => "sr25519",
            Self::Gran => "ed25519",
        }
    }
}

/// Four byte identifier of a keystore entry, like `sp_core::crypto::KeyTypeId`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyTypeId([u8; 4]);

impl KeyTypeId {
    /// The identifier as text.
    pub fn as_str(&self) -> &str {
        // Constructors only admit ASCII.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

/// Error returned for a key type id that is not four ASCII characters.
#[derive(Debug, thiserror::Error)]
#[error("key type id must be 4 ASCII characters, got {0:?}")]
pub struct InvalidKeyTypeId(String);

impl TryFrom<&str> for KeyTypeId {
    type Error = InvalidKeyTypeId;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let bytes: [u8; 4] = s
            .as_bytes()
            .try_into()
            .map_err(|_| InvalidKeyTypeId(s.to_owned()))?;
        if !bytes.iter().all(|b| b.is_ascii_graphic()) {
            return Err(InvalidKeyTypeId(s.to_owned()));
        }
        Ok(Self(bytes))
    }
}

impl std::str::FromStr for KeyTypeId {
    type Err = InvalidKeyTypeId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.try_into()
    }
}

impl fmt::Display for KeyTypeId {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}

impl fmt::Debug for KeyTypeId {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "KeyTypeId({})", self.as_str())
    }
}

/// Public keys of one authority, together with the mnemonic they come from.
/// Secret keys are dropped right after derivation.
#[derive(Clone)]
pub struct AuthorityKeySet {
    pub(super) mnemonic: Mnemonic,
    pub(super) aura: sr25519::PublicKey,
    pub(super) gran: ed25519::PublicKey,
}

impl AuthorityKeySet {
    /// Mnemonic both keys were derived from.
    pub fn mnemonic(&self) -> &Mnemonic {
        &self.mnemonic
    }

    /// Block production key.
    pub fn aura(&self) -> &sr25519::PublicKey {
        &self.aura
    }

    /// Finality voting key.
    pub fn gran(&self) -> &ed25519::PublicKey {
        &self.gran
    }

    /// `0x`-prefixed lowercase hex of the public key for `key_type`.
    pub fn public_hex(&self, key_type: KeyType) -> String {
        match key_type {
            KeyType::Aura => self.aura.encode(),
            KeyType::Gran => self.gran.encode(),
        }
    }

    /// `author_insertKey` request loading the `key_type` key into a node keystore
    /// under the keystore id `id`.
    pub fn insert_key_request(&self, key_type: KeyType, id: KeyTypeId) -> InsertKeyRequest {
        InsertKeyRequest::new(id, self.mnemonic.phrase(), self.public_hex(key_type))
    }

    /// Line registering this authority in the chain spec source.
    pub fn registration_line(&self) -> String {
        format!("authority_keys_from_seed(\"{}\"),", self.mnemonic.phrase())
    }
}

impl fmt::Debug for AuthorityKeySet {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("AuthorityKeySet")
            .field("aura", &self.aura)
            .field("gran", &self.gran)
            .finish_non_exhaustive()
    }
}
