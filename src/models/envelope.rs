use indexmap::IndexMap;
use serde::Serialize;

use super::Product;

/// Listing response for `/api/trending` and its platform filters.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<'a> {
    pub success: bool,
    pub count: usize,
    pub products: Vec<&'a Product>,
    pub last_update: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsEnvelope<'a> {
    pub success: bool,
    pub total_products: usize,
    /// Platform label to occurrence count, in first-seen order.
    pub platforms: IndexMap<&'a str, usize>,
    pub last_update: &'a str,
}

/// Health is reported as data; it never turns into an error response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEnvelope {
    pub success: bool,
    pub status: &'static str,
    /// Time the response was generated, not the data's `lastUpdate`.
    pub timestamp: String,
    pub data_available: bool,
    pub product_count: usize,
}
