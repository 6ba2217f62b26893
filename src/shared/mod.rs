//! Shared newtypes and utilities used across all domain modules.
//!
//! Identifier newtypes are serialization-transparent: they serialize as the
//! bare string the EDAN service sends, so they can be used directly in wire
//! types without conversion overhead.

pub mod outcome;
pub mod serde_util;

pub use outcome::Outcome;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── ObjectGroupId ───────────────────────────────────────────────────────────

/// Newtype for object group identifiers (e.g. `"dpt-1445611947110-1445638605523-0"`).
///
/// Assigned by the service on creation; absent on a group that was never saved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectGroupId(String);

impl ObjectGroupId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectGroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ObjectGroupId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ObjectGroupId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for ObjectGroupId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ObjectGroupId(s.to_string()))
    }
}

impl Serialize for ObjectGroupId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ObjectGroupId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_util::lenient_string::deserialize(deserializer).map(ObjectGroupId)
    }
}

// ─── PageId ──────────────────────────────────────────────────────────────────

/// Newtype for page identifiers. Unique within an object group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageId(String);

impl PageId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for PageId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PageId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_util::lenient_string::deserialize(deserializer).map(PageId)
    }
}

// ─── SortDir ─────────────────────────────────────────────────────────────────

/// Sort direction accepted by the listing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

impl std::fmt::Display for SortDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Params ──────────────────────────────────────────────────────────────────

/// Ordered `key → value` request parameters.
///
/// Insertion order is preserved because the encoded form is what gets signed.
/// Inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl ToString) -> &mut Self {
        let value = value.to_string();
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key.to_string(), value)),
        }
        self
    }

    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `application/x-www-form-urlencoded` rendering, in insertion order.
    pub fn encode(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(&self.0)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            let key: String = k.into();
            params.insert(&key, v.into());
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_group_id_serde() {
        let id = ObjectGroupId::from("dpt-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"dpt-1\"");
        let back: ObjectGroupId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_numeric_ids_deserialize_as_strings() {
        let id: ObjectGroupId = serde_json::from_str("42").unwrap();
        assert_eq!(id.as_str(), "42");
        let page: PageId = serde_json::from_str("7").unwrap();
        assert_eq!(page.as_str(), "7");
    }

    #[test]
    fn test_sort_dir_parse() {
        assert_eq!(SortDir::parse("ASC"), Some(SortDir::Asc));
        assert_eq!(SortDir::parse("desc"), Some(SortDir::Desc));
        assert_eq!(SortDir::parse("sideways"), None);
    }

    #[test]
    fn test_params_preserve_order_and_replace() {
        let mut params = Params::new();
        params.insert("start", 1).insert("rows", 10).insert("start", 5);
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("start", "5"), ("rows", "10")]);
    }

    #[test]
    fn test_params_encode() {
        let params = Params::new()
            .with("q", "*:*")
            .with("title", "two words");
        assert_eq!(params.encode().unwrap(), "q=*%3A*&title=two+words");
    }
}
