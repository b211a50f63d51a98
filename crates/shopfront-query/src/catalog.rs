//! The read-only product catalog.
//!
//! A [`Catalog`] is loaded once at startup and validated on construction:
//! identifiers are unique, prices are finite and non-negative, ratings are
//! finite. Queries borrow it and never modify it.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::page::ResultPage;
use crate::params::QueryParams;
use crate::product::{Product, ProductId};
use crate::query::compute_result_page;

/// An ordered, validated snapshot of products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, validating every product.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: product.id.clone(),
                    price: product.price,
                });
            }
            if !product.rating.is_finite() {
                return Err(CatalogError::InvalidRating {
                    id: product.id.clone(),
                    rating: product.rating,
                });
            }
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Catalog { products })
    }

    /// Parses a JSON array of products.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Catalog::new(products)
    }

    /// Reads a JSON array of products from `reader`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_reader(reader)?;
        Catalog::new(products)
    }

    /// Loads a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Catalog::from_reader(BufReader::new(file))?;
        tracing::debug!(path = %path.display(), products = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// The four-product demo catalog.
    pub fn sample() -> Self {
        Catalog {
            products: vec![
                Product::new(1, "Laptop", "Electronics", 800.0, 4.5).with_image(
                    "https://helios-i.mashable.com/imagery/articles/05djrP5PjtVB7CcMtvrTOAP/images-4.fill.size_2000x1125.v1723100793.jpg",
                ),
                Product::new(2, "Phone", "Electronics", 500.0, 4.7).with_image(
                    "https://www.cnet.com/a/img/resize/bde1b8ca1b9373b61bbf9d3e113a81ac76297b51/hub/2024/09/13/0df30744-a33f-4c6e-b58c-a90d7a914089/apple-iphone-16-2815.jpg?auto=webp&height=500",
                ),
                Product::new(3, "Shoes", "Fashion", 100.0, 4.2).with_image(
                    "https://images.unsplash.com/photo-1542291026-7eec264c27ff?fm=jpg&q=60&w=3000&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8Mnx8c2hvZXN8ZW58MHx8MHx8fDA%3D",
                ),
                Product::new(4, "Watch", "Fashion", 150.0, 4.3).with_image(
                    "https://images.pexels.com/photos/190819/pexels-photo-190819.jpeg?cs=srgb&dl=pexels-ferarcosn-190819.jpg&fm=jpg",
                ),
            ],
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by identifier.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Distinct category labels, in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Computes the visible page for `params`.
    pub fn query(&self, params: &QueryParams) -> ResultPage<'_> {
        compute_result_page(&self.products, params)
    }
}

impl AsRef<[Product]> for Catalog {
    fn as_ref(&self) -> &[Product] {
        &self.products
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_valid() {
        let sample = Catalog::sample();
        assert_eq!(sample.len(), 4);
        assert_eq!(Catalog::new(sample.products().to_vec()).unwrap(), sample);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![
            Product::new(1, "Laptop", "Electronics", 800.0, 4.5),
            Product::new(1, "Phone", "Electronics", 500.0, 4.7),
        ])
        .unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateId(ProductId::Int(1))));
    }

    #[test]
    fn integer_and_string_ids_are_distinct() {
        let catalog = Catalog::new(vec![
            Product::new(1, "Laptop", "Electronics", 800.0, 4.5),
            Product::new("1", "Phone", "Electronics", 500.0, 4.7),
        ])
        .unwrap();

        assert_eq!(catalog.get(&ProductId::from("1")).unwrap().name, "Phone");
    }

    #[test]
    fn rejects_negative_and_nan_prices() {
        let negative = Catalog::new(vec![Product::new(1, "Gift", "Misc", -1.0, 3.0)]);
        assert!(matches!(negative, Err(CatalogError::InvalidPrice { .. })));

        let nan = Catalog::new(vec![Product::new(1, "Gift", "Misc", f64::NAN, 3.0)]);
        assert!(matches!(nan, Err(CatalogError::InvalidPrice { .. })));
    }

    #[test]
    fn accepts_free_products_and_rejects_infinite_ratings() {
        assert!(Catalog::new(vec![Product::new(1, "Sticker", "Misc", 0.0, 0.0)]).is_ok());

        let err = Catalog::new(vec![Product::new(1, "Gift", "Misc", 1.0, f64::INFINITY)]);
        assert!(matches!(err, Err(CatalogError::InvalidRating { .. })));
    }

    #[test]
    fn categories_in_first_seen_order() {
        assert_eq!(Catalog::sample().categories(), vec!["Electronics", "Fashion"]);
        assert!(Catalog::default().categories().is_empty());
    }

    #[test]
    fn get_by_id() {
        let sample = Catalog::sample();
        assert_eq!(sample.get(&ProductId::Int(3)).unwrap().name, "Shoes");
        assert!(sample.get(&ProductId::Int(99)).is_none());
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = Catalog::from_json_str(r#"{"not": "an array"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
        assert!(err.to_string().starts_with("invalid catalog JSON"));
    }
}
