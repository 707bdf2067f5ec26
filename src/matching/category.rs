//! Furniture type handling
//!
//! Maps user-facing furniture keywords to catalog category slugs and
//! implements the category checks shared by the matcher and the candidate
//! pre-filter.

use std::collections::BTreeMap;

use super::product::Product;

/// Translate a furniture keyword (e.g. `divano`) to its catalog slug
///
/// Unmapped keywords are returned unchanged.
pub fn map_furniture_type(map: &BTreeMap<String, String>, furniture_type: &str) -> String {
    map.get(furniture_type)
        .cloned()
        .unwrap_or_else(|| furniture_type.to_string())
}

/// Whether the product's category or name contains the furniture type
///
/// Case-insensitive substring check. An empty furniture type matches every
/// product.
pub fn matches_furniture_type(product: &Product, furniture_type: &str) -> bool {
    if furniture_type.is_empty() {
        return true;
    }
    let needle = furniture_type.to_lowercase();
    product.category_or_empty().to_lowercase().contains(&needle)
        || product.name_or_empty().to_lowercase().contains(&needle)
}

/// Catalog candidates whose category contains `category`, capped at `limit`
///
/// Input order is preserved.
pub fn filter_by_category(products: &[Product], category: &str, limit: usize) -> Vec<Product> {
    let needle = category.to_lowercase();
    products
        .iter()
        .filter(|p| p.category_or_empty().to_lowercase().contains(&needle))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RecommendationConfig;

    #[test]
    fn test_map_furniture_type() {
        let map = RecommendationConfig::default().category_map;
        assert_eq!(map_furniture_type(&map, "divano"), "divani-letto");
        assert_eq!(map_furniture_type(&map, "mobile-tv"), "mobili-tv-moderni");
        assert_eq!(map_furniture_type(&map, "armadio"), "guardaroba");
        assert_eq!(map_furniture_type(&map, "poltrona"), "poltrona");
    }

    #[test]
    fn test_matches_furniture_type() {
        let by_name = Product::new("1", "Divano Grigio").with_category("divani-letto");
        let by_category = Product::new("2", "Oslo").with_category("Sedie");
        let unnamed = Product::default();

        assert!(matches_furniture_type(&by_name, "divano"));
        assert!(matches_furniture_type(&by_name, "DIVANO"));
        assert!(matches_furniture_type(&by_category, "sedie"));
        assert!(!matches_furniture_type(&by_category, "divano"));
        assert!(!matches_furniture_type(&unnamed, "letto"));
        assert!(matches_furniture_type(&unnamed, ""));
    }

    #[test]
    fn test_filter_by_category_caps_and_keeps_order() {
        let products: Vec<Product> = (0..30)
            .map(|i| {
                let category = if i % 2 == 0 { "Sedie" } else { "tavoli" };
                Product::new(i.to_string(), format!("Prodotto {}", i)).with_category(category)
            })
            .collect();

        let chairs = filter_by_category(&products, "sedie", 5);
        let ids: Vec<&str> = chairs.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "2", "4", "6", "8"]);

        assert!(filter_by_category(&products, "librerie", 20).is_empty());
    }
}
