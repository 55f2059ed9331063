//! Timeline response decoding.

use std::io::Read;

use crate::types::Tweet;

/// `created_at` pattern used by the v1.1 API, e.g. `Wed Oct 10 20:19:24 +0000 2018`.
///
/// The offset is always `+0000`, so it is matched literally rather than
/// parsed as a zone. Day and month names match case-insensitively.
pub const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S +0000 %Y";

/// Decode a JSON array of tweets, keeping server order.
pub fn decode_timeline(bytes: &[u8]) -> serde_json::Result<Vec<Tweet>> {
    serde_json::from_slice(bytes)
}

/// Decode a JSON array of tweets from a reader.
pub fn decode_timeline_reader<R: Read>(reader: R) -> serde_json::Result<Vec<Tweet>> {
    serde_json::from_reader(reader)
}

pub(crate) mod created_at {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::CREATED_AT_FORMAT;

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(CREATED_AT_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&value, CREATED_AT_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(|e| de::Error::custom(format!("invalid created_at {value:?}: {e}")))
    }
}
