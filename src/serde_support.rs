//! Serde support for [`BitMap`].
//!
//! The persisted form is the pair that fully determines bitmap state: the
//! logical bit count and the backing words, verbatim. Deserialization goes
//! through [`BitMap::from_words`], so a word sequence that cannot back the
//! declared bit count is rejected instead of producing an inconsistent map.

use crate::bitmap::BitMap;
use serde::de::{Deserialize, Deserializer, Error};
use serde::ser::{Serialize, SerializeStruct, Serializer};

impl Serialize for BitMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BitMap", 2)?;
        state.serialize_field("bit_count", &self.len())?;
        state.serialize_field("words", self.words())?;
        state.end()
    }
}

#[derive(serde::Deserialize)]
struct Repr {
    bit_count: usize,
    words: Vec<u32>,
}

impl<'de> Deserialize<'de> for BitMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = Repr::deserialize(deserializer)?;
        BitMap::from_words(repr.words, repr.bit_count).map_err(D::Error::custom)
    }
}
