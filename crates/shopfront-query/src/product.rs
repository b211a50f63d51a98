//! Catalog products.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::{Field, Queryable};
use crate::value::Value;

/// Product identifier: a JSON integer or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Int(n) => write!(f, "{n}"),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        ProductId::Int(n)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        ProductId::Text(s.to_string())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        ProductId::Text(s)
    }
}

/// A single catalog entry. Immutable once it is part of a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
    /// Conventionally between 0 and 5.
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Creates a product without an image.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        rating: f64,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            rating,
            image: None,
        }
    }

    /// Sets the image URL shown on the product card.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }
}

impl Queryable for Product {
    fn field_value(&self, field: Field) -> Value<'_> {
        match field {
            Field::Name => Value::Text(&self.name),
            Field::Category => Value::Text(&self.category),
            Field::Price => Value::Number(self.price),
            Field::Rating => Value::Number(self.rating),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_values() {
        let laptop = Product::new(1, "Laptop", "Electronics", 800.0, 4.5);

        assert_eq!(laptop.field_value(Field::Name), Value::Text("Laptop"));
        assert_eq!(laptop.field_value(Field::Category), Value::Text("Electronics"));
        assert_eq!(laptop.field_value(Field::Price), Value::Number(800.0));
        assert_eq!(laptop.field_value(Field::Rating), Value::Number(4.5));
    }

    #[test]
    fn id_accepts_integers_and_strings() {
        let numeric: Product = serde_json::from_str(
            r#"{"id": 7, "name": "Lamp", "category": "Home", "price": 30, "rating": 3.9}"#,
        )
        .unwrap();
        assert_eq!(numeric.id, ProductId::Int(7));
        assert_eq!(numeric.price, 30.0);
        assert!(numeric.image.is_none());

        let textual: Product = serde_json::from_str(
            r#"{"id": "sku-9", "name": "Mug", "category": "Home", "price": 8.5, "rating": 4.0, "image": "mug.png"}"#,
        )
        .unwrap();
        assert_eq!(textual.id, ProductId::from("sku-9"));
        assert_eq!(textual.image.as_deref(), Some("mug.png"));
    }

    #[test]
    fn serialization_skips_missing_image() {
        let json = serde_json::to_string(&Product::new(1, "Pen", "Office", 2.0, 4.0)).unwrap();
        assert!(json.contains("\"id\":1"));
        assert!(!json.contains("image"));
    }

    #[test]
    fn id_display() {
        assert_eq!(ProductId::Int(3).to_string(), "3");
        assert_eq!(ProductId::from("abc").to_string(), "abc");
    }
}
