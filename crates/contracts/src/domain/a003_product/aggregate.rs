use serde::{Deserialize, Serialize};

use crate::domain::a002_subcategory::aggregate::Subcategory;

pub type ProductId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "idProduct")]
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    /// Image path relative to the backend origin, e.g. `/images/cola.png`
    #[serde(default)]
    pub img: Option<String>,
    #[serde(rename = "idSubcategory", default)]
    pub subcategory: Option<Subcategory>,
}

impl Product {
    pub fn subcategory_name(&self) -> &str {
        self.subcategory
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or("-")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub img: Option<String>,
    #[serde(rename = "idSubcategory")]
    pub subcategory: Option<Subcategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_optional_fields() {
        let json = r#"{"idProduct":1,"name":"Cola","price":2.5}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, 2.5);
        assert_eq!(product.img, None);
        assert_eq!(product.subcategory_name(), "-");
    }
}
