use serde::Serialize;
use serde_json::{Map, Value};

/// The claims produced by one attestation source invocation.
///
/// Keys are unique and their order carries no meaning. Once built the set
/// cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClaimSet {
    claims: Map<String, Value>,
}

impl ClaimSet {

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.claims.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.claims.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.claims.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.claims.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.claims.iter()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.claims
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.claims
    }
}

impl From<Map<String, Value>> for ClaimSet {
    fn from(claims: Map<String, Value>) -> Self {
        ClaimSet { claims }
    }
}

/// Later pairs overwrite earlier pairs with the same key.
impl<K: Into<String>> FromIterator<(K, Value)> for ClaimSet {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        ClaimSet {
            claims: iter.into_iter().map(|(key, value)| (key.into(), value)).collect(),
        }
    }
}
