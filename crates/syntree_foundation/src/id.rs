//! Node identifiers and their generator.
//!
//! Ids are opaque strings so that trees loaded from an export keep whatever
//! ids they were saved with. Freshly generated ids are random 128-bit values
//! rendered in the UUID v4 layout, drawn from a seeded `ChaCha8` stream so a
//! given seed always yields the same sequence.

use std::fmt;
use std::sync::Arc;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Identifier of a tree node, unique within one tree.
///
/// Clone is O(1).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Arc<str>);

impl NodeId {
    /// Creates an id from any string.
    #[must_use]
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// Returns the id text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::NodeId;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for NodeId {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for NodeId {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            String::deserialize(deserializer).map(NodeId::from)
        }
    }
}

/// Generator for fresh node ids.
#[derive(Clone, Debug)]
pub struct NodeIdGenerator {
    rng: ChaCha8Rng,
}

impl NodeIdGenerator {
    /// Creates a generator whose sequence is fully determined by `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a generator seeded from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        Self::seeded(rand::random())
    }

    /// Returns the next id.
    pub fn next_id(&mut self) -> NodeId {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        // version 4, RFC 4122 variant
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;

        let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        NodeId::from(format!(
            "{}-{}-{}-{}-{}",
            &hex[0..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..32]
        ))
    }
}

impl Default for NodeIdGenerator {
    fn default() -> Self {
        Self::random()
    }
}
