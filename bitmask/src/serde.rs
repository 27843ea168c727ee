use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::FixedBitVector;

impl Serialize for FixedBitVector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self:#}"))
    }
}

impl<'de> Deserialize<'de> for FixedBitVector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        string.parse().map_err(de::Error::custom)
    }
}
