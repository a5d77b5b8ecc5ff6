/// URL slug to exact platform label, as written by the scraper.
///
/// The filter itself works on any label; a new platform only needs an entry
/// here to get its own `/api/trending/{slug}` endpoint.
pub static PLATFORMS: &[(&str, &str)] = &[
    ("amazon", "Amazon"),
    ("producthunt", "Product Hunt"),
];

/// Resolve a URL slug to its platform label.
pub fn label_for(slug: &str) -> Option<&'static str> {
    PLATFORMS
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_slugs_resolve() {
        assert_eq!(label_for("amazon"), Some("Amazon"));
        assert_eq!(label_for("producthunt"), Some("Product Hunt"));
    }

    #[test]
    fn unknown_or_label_cased_slugs_do_not_resolve() {
        assert_eq!(label_for("ebay"), None);
        assert_eq!(label_for("Amazon"), None);
        assert_eq!(label_for(""), None);
    }
}
