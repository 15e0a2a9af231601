//! Serialization helpers for the sheet records
//!
//! Dates leave the crate the way the sheet shows them: `YYYY-MM-DD`, or an
//! empty string when the cell had no usable date.

/// `Option<NaiveDate>` as `"YYYY-MM-DD"` or `""`
///
/// Deserialization also accepts `null` for a missing date.
pub mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.collect_str(&date.format(FORMAT)),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(raw, FORMAT)
            .map(Some)
            .map_err(|err| de::Error::custom(format!("invalid date '{}': {}", raw, err)))
    }
}
