//! Serde support for cards: a Card crosses the wire as its compact token

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::Card;

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.token())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Card>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}
