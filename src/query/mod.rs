//! Read-only views over a [`Snapshot`]. Nothing here can fail: by the time a
//! snapshot exists it has already been validated by the loader.

use chrono::{SecondsFormat, Utc};
use indexmap::IndexMap;

use crate::models::{Envelope, HealthEnvelope, Product, Snapshot, StatsEnvelope};

/// Histogram bucket for products that carry no string `platform`. A missing
/// label, a non-string label (e.g. `7`) and a non-object element all land
/// here, so their original values are not distinguished in the stats.
pub const UNKNOWN_PLATFORM: &str = "unknown";

/// Every product in loader order.
pub fn all(snapshot: &Snapshot) -> Envelope<'_> {
    listing(snapshot, snapshot.products.iter().collect())
}

/// Products whose `platform` equals `platform` exactly, relative order kept.
pub fn by_platform<'a>(snapshot: &'a Snapshot, platform: &str) -> Envelope<'a> {
    let matching = snapshot
        .products
        .iter()
        .filter(|p| p.is_from(platform))
        .collect();
    listing(snapshot, matching)
}

fn listing<'a>(snapshot: &'a Snapshot, products: Vec<&'a Product>) -> Envelope<'a> {
    Envelope {
        success: true,
        count: products.len(),
        products,
        last_update: &snapshot.last_update,
    }
}

pub fn stats(snapshot: &Snapshot) -> StatsEnvelope<'_> {
    StatsEnvelope {
        success: true,
        total_products: snapshot.len(),
        platforms: platform_counts(&snapshot.products),
        last_update: &snapshot.last_update,
    }
}

/// Single pass over `products`. Platforms that never occur are absent, not 0.
pub fn platform_counts(products: &[Product]) -> IndexMap<&str, usize> {
    let mut counts = IndexMap::new();
    for product in products {
        *counts
            .entry(product.platform().unwrap_or(UNKNOWN_PLATFORM))
            .or_insert(0) += 1;
    }
    counts
}

/// `loaded` is `None` when the loader reported absence.
pub fn health(loaded: Option<&Snapshot>) -> HealthEnvelope {
    HealthEnvelope {
        success: true,
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        data_available: loaded.is_some(),
        product_count: loaded.map_or(0, Snapshot::len),
    }
}
