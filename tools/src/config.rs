//! Generator configuration.
use anyhow::Context as _;
use polkadex_keygen_crypto::mnemonic::{self, MnemonicError, DEFAULT_WORD_COUNT};
use polkadex_keygen_roles::authority::{InvalidKeyTypeId, KeyType, KeyTypeId};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Replaced with the node index in the naming template.
pub const INDEX_PLACEHOLDER: &str = "{index}";
/// Replaced with the key type id in the naming template.
pub const KEY_TYPE_PLACEHOLDER: &str = "{key_type}";

/// Number of nodes generated when nothing else is configured.
pub const DEFAULT_NODE_COUNT: usize = 100;
/// Output directory used when nothing else is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "../templates";
/// File name template used when nothing else is configured.
pub const DEFAULT_NAMING_TEMPLATE: &str = "polkadex-node-{index}-{key_type}.json";

/// Decodes a value from json, rejecting trailing characters.
pub fn decode_json<T: serde::de::DeserializeOwned>(json: &str) -> anyhow::Result<T> {
    let mut d = serde_json::Deserializer::from_str(json);
    let p = T::deserialize(&mut d)?;
    d.end()?;
    Ok(p)
}

/// Invalid generator configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The naming template lacks a placeholder, so file names would collide.
    #[error("naming template {template:?} must contain {placeholder}")]
    MissingPlaceholder {
        /// Offending template.
        template: String,
        /// Placeholder which is missing.
        placeholder: &'static str,
    },
    /// A key type id is malformed.
    #[error(transparent)]
    KeyTypeId(#[from] InvalidKeyTypeId),
    /// Both key types map to the same id, so their files would collide.
    #[error("aura and gran key types must differ, both are {0:?}")]
    DuplicateKeyType(String),
    /// Mnemonic length not defined by BIP-39.
    #[error("invalid word count")]
    WordCount(#[source] MnemonicError),
}

/// Configuration of a generator run. Every field has a default, so a config
/// file only needs to list what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Number of nodes to generate keys for.
    pub node_count: usize,
    /// Directory the request files are written to.
    pub output_dir: PathBuf,
    /// File name template, with `{index}` and `{key_type}` placeholders.
    pub naming_template: String,
    /// Keystore id of the block production key.
    pub aura_key_type: String,
    /// Keystore id of the finality voting key.
    pub gran_key_type: String,
    /// Words per generated mnemonic.
    pub word_count: usize,
    /// Create `output_dir` if it does not exist yet.
    pub create_output_dir: bool,
    /// Optional file receiving all `authority_keys_from_seed(..)` lines.
    pub authorities_file: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            output_dir: DEFAULT_OUTPUT_DIR.into(),
            naming_template: DEFAULT_NAMING_TEMPLATE.to_owned(),
            aura_key_type: KeyType::Aura.default_id().to_string(),
            gran_key_type: KeyType::Gran.default_id().to_string(),
            word_count: DEFAULT_WORD_COUNT,
            create_output_dir: false,
            authorities_file: None,
        }
    }
}

impl GeneratorConfig {
    /// Reads a JSON config file.
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let json =
            fs::read_to_string(path).with_context(|| format!("read_to_string({path:?})"))?;
        decode_json(&json).with_context(|| format!("decode_json({path:?})"))
    }

    /// Checks everything that would make a run fail or overwrite its own files.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for placeholder in [INDEX_PLACEHOLDER, KEY_TYPE_PLACEHOLDER] {
            if !self.naming_template.contains(placeholder) {
                return Err(ConfigError::MissingPlaceholder {
                    template: self.naming_template.clone(),
                    placeholder,
                });
            }
        }
        let aura = self.key_type_id(KeyType::Aura)?;
        let gran = self.key_type_id(KeyType::Gran)?;
        if aura == gran {
            return Err(ConfigError::DuplicateKeyType(aura.to_string()));
        }
        mnemonic::entropy_length(self.word_count).map_err(ConfigError::WordCount)?;
        Ok(())
    }

    /// Configured keystore id for `key_type`.
    pub fn key_type_id(&self, key_type: KeyType) -> Result<KeyTypeId, ConfigError> {
        let id = match key_type {
            KeyType::Aura => &self.aura_key_type,
            KeyType::Gran => &self.gran_key_type,
        };
        Ok(id.parse::<KeyTypeId>()?)
    }

    /// Path of the request file for node `index` and keystore id `id`.
    pub fn file_path(&self, index: usize, id: KeyTypeId) -> PathBuf {
        let name = self
            .naming_template
            .replace(INDEX_PLACEHOLDER, &index.to_string())
            .replace(KEY_TYPE_PLACEHOLDER, id.as_str());
        self.output_dir.join(name)
    }
}
