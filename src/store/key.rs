// Cache key for resource collections.
// Primary keys are numeric IDs for most resources, strings for Country ISO
// and Teacher Abbr.

use std::fmt;

use serde_json::Value;

/// Primary-key value used to index a cached collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CacheKey {
    Int(i64),
    Text(String),
}

impl CacheKey {
    /// Extract a key from a record's primary-key field.
    /// Only integers and strings are usable keys.
    pub fn from_value(value: &Value) -> Option<CacheKey> {
        match value {
            Value::Number(n) => n.as_i64().map(CacheKey::Int),
            Value::String(s) => Some(CacheKey::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Int(id) => write!(f, "{id}"),
            CacheKey::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CacheKey {
    fn from(id: i64) -> Self {
        CacheKey::Int(id)
    }
}

impl TryFrom<u64> for CacheKey {
    type Error = std::num::TryFromIntError;

    // Fallible: keys are cached as i64, so values above i64::MAX must not
    // wrap into negative keys.
    fn try_from(id: u64) -> Result<Self, Self::Error> {
        Ok(CacheKey::Int(i64::try_from(id)?))
    }
}

impl From<&str> for CacheKey {
    fn from(s: &str) -> Self {
        CacheKey::Text(s.to_string())
    }
}

impl From<String> for CacheKey {
    fn from(s: String) -> Self {
        CacheKey::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value() {
        assert_eq!(CacheKey::from_value(&json!(42)), Some(CacheKey::Int(42)));
        assert_eq!(
            CacheKey::from_value(&json!("CH")),
            Some(CacheKey::Text("CH".into()))
        );
        assert_eq!(CacheKey::from_value(&json!(null)), None);
        assert_eq!(CacheKey::from_value(&json!(1.5)), None);
        assert_eq!(CacheKey::from_value(&json!({"ID": 1})), None);
    }

    #[test]
    fn test_try_from_u64() {
        assert_eq!(CacheKey::try_from(7u64).unwrap(), CacheKey::Int(7));
        assert!(CacheKey::try_from(u64::MAX).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(CacheKey::Int(7).to_string(), "7");
        assert_eq!(CacheKey::Text("MEI".into()).to_string(), "MEI");
    }
}
