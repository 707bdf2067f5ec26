//! Catalog product records and scored match results

use serde::{Deserialize, Serialize};

/// A catalog product as read from the product store
///
/// Every text field may be missing; matching treats a missing field as an
/// empty string.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: f64,
    /// Image URLs, first one is the cover
    pub images: Vec<String>,
    pub stock: i64,
    pub color: Option<String>,
    pub material: Option<String>,
    pub style: Option<String>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn category_or_empty(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// Lower-cased `name + " " + description`
    pub fn text(&self) -> String {
        format!("{} {}", self.name_or_empty(), self.description_or_empty()).to_lowercase()
    }

    /// Lower-cased `name + " " + description + " " + extra`
    pub fn text_with(&self, extra: Option<&str>) -> String {
        format!(
            "{} {} {}",
            self.name_or_empty(),
            self.description_or_empty(),
            extra.unwrap_or("")
        )
        .to_lowercase()
    }

    /// First image URL, if any
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// A product copy carrying its compatibility score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredProduct {
    #[serde(flatten)]
    pub product: Product,
    pub compatibility_score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_with_missing_fields() {
        let product = Product::default();
        assert_eq!(product.text(), " ");
        assert_eq!(product.text_with(None), "  ");

        let named = Product::new("1", "Divano GRIGIO");
        assert_eq!(named.text(), "divano grigio ");
    }

    #[test]
    fn test_text_with_extra_field() {
        let product = Product::new("1", "Sedia")
            .with_description("In Legno")
            .with_material("Noce");
        assert_eq!(product.text_with(product.material.as_deref()), "sedia in legno noce");
    }

    #[test]
    fn test_deserialize_store_document() {
        let json = r#"{
            "_id": "64f0c1",
            "name": "Libreria Oslo",
            "category": "librerie",
            "price": 349.9,
            "images": ["/img/oslo-1.jpg", "/img/oslo-2.jpg"],
            "stock": 3
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "64f0c1");
        assert_eq!(product.description, None);
        assert_eq!(product.cover_image(), Some("/img/oslo-1.jpg"));
    }

    #[test]
    fn test_scored_product_flattens() {
        let scored = ScoredProduct {
            product: Product::new("7", "Letto Aria"),
            compatibility_score: 65,
        };
        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["name"], "Letto Aria");
        assert_eq!(value["compatibilityScore"], 65);
    }
}
