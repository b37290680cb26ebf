//! Custom serde helpers for CoinGecko wire formats.

/// Deserializes an optional Unix-seconds number into `Option<DateTime<Utc>>`.
///
/// `simple/price` reports `last_updated_at` as epoch seconds, sometimes `null`.
pub mod option_timestamp_secs {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(at) => serializer.serialize_some(&at.timestamp()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<i64>::deserialize(deserializer)? {
            None => Ok(None),
            Some(secs) => DateTime::<Utc>::from_timestamp(secs, 0)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", secs))),
        }
    }
}

/// Accepts a number, a numeric string, or `null` for an `Option<f64>` field.
///
/// Some trending fields arrive as JSON numbers on one plan and as strings on
/// another. Unparsable strings become `None`. Always serializes as a number.
pub mod option_f64_lenient {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(
            match Option::<NumberOrString>::deserialize(deserializer)? {
                Some(NumberOrString::Number(n)) => Some(n),
                Some(NumberOrString::Text(s)) => s.trim().replace(',', "").parse().ok(),
                None => None,
            },
        )
    }
}

/// Treats an explicit JSON `null` as the type's default value.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Sample {
        #[serde(default, with = "super::option_timestamp_secs")]
        at: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "super::null_as_default")]
        tags: Vec<String>,
        #[serde(default, with = "super::option_f64_lenient")]
        price: Option<f64>,
    }

    #[test]
    fn test_timestamp_secs_and_nulls() {
        let p: Sample = serde_json::from_str(r#"{"at": 1700000000, "tags": null}"#).unwrap();
        assert_eq!(p.at.unwrap().timestamp(), 1_700_000_000);
        assert!(p.tags.is_empty());

        let p: Sample = serde_json::from_str(r#"{"at": null}"#).unwrap();
        assert!(p.at.is_none());
        assert!(p.price.is_none());
    }

    #[test]
    fn test_lenient_f64() {
        let p: Sample = serde_json::from_str(r#"{"price": 12.5}"#).unwrap();
        assert_eq!(p.price, Some(12.5));
        let p: Sample = serde_json::from_str(r#"{"price": "1,234.5"}"#).unwrap();
        assert_eq!(p.price, Some(1234.5));
        let p: Sample = serde_json::from_str(r#"{"price": "$n/a"}"#).unwrap();
        assert_eq!(p.price, None);
    }

    #[test]
    fn test_serialize_writes_plain_values() {
        let p: Sample =
            serde_json::from_str(r#"{"at": 1700000000, "price": "2.5", "tags": ["a"]}"#).unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["at"], 1_700_000_000i64);
        assert_eq!(json["price"], 2.5f64);

        let empty: Sample = serde_json::from_str("{}").unwrap();
        let json = serde_json::to_value(&empty).unwrap();
        assert!(json["at"].is_null());
        assert!(json["price"].is_null());
    }
}
