//! `serde` support for [`Felt`], enabled by the `serde` feature.
//!
//! Elements travel as `0x`-prefixed hexadecimal strings; deserialisation
//! enforces the same canonicity rule as byte decoding.

use super::Felt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

impl Serialize for Felt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Felt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Felt::from_hex(&text).map_err(de::Error::custom)
    }
}
