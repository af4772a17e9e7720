//! Traits for text (human readable) and byte encodings for crypto primitives.
use anyhow::Context as _;

/// Prefix of every hex string accepted by the node RPC.
pub const HEX_PREFIX: &str = "0x";

/// Utility for parsing human-readable text representations via TextFmt::decode.
/// It keeps a reference to the initial text and a reference to the remaining unparsed text,
/// so that a parsing error can point at the part which failed.
pub struct Text<'a> {
    /// Initial text.
    context: &'a str,
    /// Remaining unparsed text.
    inner: &'a str,
}

impl<'a> Text<'a> {
    /// Constructs a new unparsed text.
    pub fn new(s: &'a str) -> Self {
        Self {
            context: s,
            inner: s,
        }
    }

    /// Prefix of this text, which has been already parsed.
    fn prefix(&self) -> &'a str {
        // `self.inner` is always a suffix of `self.context`, so the range end
        // lies on a char boundary.
        &self.context[..self.context.len() - self.inner.len()]
    }

    /// Strips a fixed prefix from the remaining text.
    pub fn strip(mut self, prefix: &str) -> anyhow::Result<Self> {
        let Some(inner) = self.inner.strip_prefix(prefix) else {
            anyhow::bail!("{}: expected {} got {}", self.prefix(), prefix, self.inner);
        };
        self.inner = inner;
        Ok(self)
    }

    /// Parses the remaining text, assuming that it is in hex format.
    /// The parsed bytes are then converted to T, using ByteFmt trait.
    pub fn decode_hex<T: ByteFmt>(self) -> anyhow::Result<T> {
        let raw = hex::decode(self.inner).context(self.prefix().to_owned())?;
        ByteFmt::decode(&raw).context(self.prefix().to_owned())
    }

    /// Syntax sugar for `TextFmt::decode`.
    pub fn decode<T: TextFmt>(self) -> anyhow::Result<T> {
        TextFmt::decode(self)
    }
}

/// Trait converting a type from/to a human-readable text format.
/// `x == decode(x.encode())` has to hold.
pub trait TextFmt: Sized {
    /// Decodes the object from a text representation.
    fn decode(text: Text) -> anyhow::Result<Self>;
    /// Encodes the object to a text representation.
    fn encode(&self) -> String;
}

/// Trait converting a type from/to its raw byte format.
pub trait ByteFmt: Sized {
    /// Decodes the object from the byte representation.
    fn decode(bytes: &[u8]) -> anyhow::Result<Self>;
    /// Encodes the object to the byte representation.
    fn encode(&self) -> Vec<u8>;
}

/// Encodes bytes as a `0x`-prefixed lowercase hex string.
pub fn encode_prefixed_hex(bytes: &[u8]) -> String {
    format!("{HEX_PREFIX}{}", hex::encode(bytes))
}

/// Decodes a `0x`-prefixed hex string into T.
pub fn decode_prefixed_hex<T: ByteFmt>(text: &str) -> anyhow::Result<T> {
    Text::new(text).strip(HEX_PREFIX)?.decode_hex()
}
