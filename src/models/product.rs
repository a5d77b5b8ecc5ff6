use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// One scraped listing, kept as the producer wrote it. Only `platform` is
/// ever read; everything else (including elements that are not objects at
/// all) is carried through untouched, in its original key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product(Value);

impl Product {
    /// The source platform label, if this is an object with a string label.
    pub fn platform(&self) -> Option<&str> {
        self.0.get("platform").and_then(Value::as_str)
    }

    /// Exact, case-sensitive platform match. A missing label never matches.
    pub fn is_from(&self, platform: &str) -> bool {
        self.platform() == Some(platform)
    }
}

/// A validated, request-scoped view of the backing document.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    /// Stored count as written by the producer. Not trusted for responses.
    pub count: Number,
    #[serde(rename = "lastUpdate")]
    pub last_update: String,
    pub products: Vec<Product>,
}

impl Snapshot {
    /// Number of products actually present.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the stored `count` agrees with the product list.
    pub fn count_matches(&self) -> bool {
        self.count.as_u64() == Some(self.products.len() as u64)
    }
}
