//! Product catalog rules.

/// Stock states the inventory screen offers.
pub const PRODUCT_STATUSES: [&str; 4] = ["In Stock", "Low Stock", "Out of Stock", "Draft"];

pub const DEFAULT_PRODUCT_STATUS: &str = "In Stock";

/// Normalize a category name as typed into the product form.
pub fn normalize_category_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether `name` already appears in `existing`. Products reference
/// categories by name, so the comparison is exact after normalization.
pub fn category_exists<'a, I>(name: &str, existing: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let wanted = normalize_category_name(name);
    existing
        .into_iter()
        .any(|candidate| normalize_category_name(candidate) == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_inner_whitespace() {
        assert_eq!(normalize_category_name("  CNC   Parts "), "CNC Parts");
    }

    #[test]
    fn existing_category_lookup() {
        let names = ["CNC Parts", "Molds"];
        assert!(category_exists(" CNC  Parts", names));
        assert!(!category_exists("cnc parts", names));
        assert!(!category_exists("Fixtures", names));
    }
}
