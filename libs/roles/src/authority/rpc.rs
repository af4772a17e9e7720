//! `author_insertKey` JSON-RPC request, the body a node accepts to load a key
//! into its local keystore.

use super::KeyTypeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON-RPC protocol version.
pub const JSONRPC_VERSION: &str = "2.0";
/// RPC method populating the node keystore.
pub const INSERT_KEY_METHOD: &str = "author_insertKey";
/// Request id used in every generated request.
pub const REQUEST_ID: u64 = 1;

/// `{"jsonrpc":"2.0","id":1,"method":"author_insertKey","params":[key_type, suri, public]}`
///
/// Field order is the serialization order.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InsertKeyRequest {
    jsonrpc: String,
    id: u64,
    method: String,
    params: InsertKeyParams,
}

/// Positional params: key type id, secret URI (here the mnemonic) and public key hex.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
struct InsertKeyParams(String, String, String);

impl InsertKeyRequest {
    /// Builds a request inserting the key derived from `suri` under `key_type`.
    pub fn new(key_type: KeyTypeId, suri: &str, public_hex: String) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            id: REQUEST_ID,
            method: INSERT_KEY_METHOD.to_owned(),
            params: InsertKeyParams(key_type.to_string(), suri.to_owned(), public_hex),
        }
    }

    /// Key type id, e.g. `aura`.
    pub fn key_type(&self) -> &str {
        &self.params.0
    }

    /// Secret URI the node derives the key from.
    pub fn suri(&self) -> &str {
        &self.params.1
    }

    /// `0x`-prefixed public key.
    pub fn public(&self) -> &str {
        &self.params.2
    }

    /// RPC method name.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Compact JSON, the same shape `JSON.stringify` produces.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parses a request previously written with [`Self::to_json`].
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl fmt::Debug for InsertKeyRequest {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("InsertKeyRequest")
            .field("method", &self.method)
            .field("key_type", &self.key_type())
            .field("public", &self.public())
            .finish_non_exhaustive()
    }
}
