//! Product catalog: static id → name/mass mapping, read-only once built.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stockline_core::{DomainError, DomainResult, Entity, ProductId};

/// Catalog entry as supplied at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub product_id: ProductId,
    pub product_name: String,
    /// Mass of a single unit, in grams.
    pub mass_g: f64,
}

impl ProductInfo {
    pub fn new(product_id: ProductId, product_name: impl Into<String>, mass_g: f64) -> Self {
        Self {
            product_id,
            product_name: product_name.into(),
            mass_g,
        }
    }
}

impl Entity for ProductInfo {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.product_id
    }
}

/// Catalog entry joined with its current stock level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub product_id: ProductId,
    pub product_name: String,
    pub mass_g: f64,
    pub stock: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<ProductId, ProductInfo>,
}

impl Catalog {
    /// Build a catalog; a repeated `product_id` keeps the last entry.
    ///
    /// Every unit must fit in a batch on its own, so masses must be finite,
    /// positive and no heavier than `max_batch_mass_g`.
    pub fn new(
        products: impl IntoIterator<Item = ProductInfo>,
        max_batch_mass_g: f64,
    ) -> DomainResult<Self> {
        let mut catalog = Self::default();
        for product in products {
            validate_mass(&product, max_batch_mass_g)?;
            catalog.products.insert(product.id(), product);
        }
        Ok(catalog)
    }

    pub fn get(&self, product_id: ProductId) -> Option<&ProductInfo> {
        self.products.get(&product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.products.contains_key(&product_id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductInfo> {
        self.products.values()
    }
}

fn validate_mass(product: &ProductInfo, max_batch_mass_g: f64) -> DomainResult<()> {
    if !(product.mass_g.is_finite() && product.mass_g > 0.0) {
        return Err(DomainError::validation(format!(
            "product {}: mass_g must be a finite positive number",
            product.product_id
        )));
    }
    if product.mass_g > max_batch_mass_g {
        return Err(DomainError::validation(format!(
            "product {}: unit mass {}g exceeds the {}g batch cap",
            product.product_id, product.mass_g, max_batch_mass_g
        )));
    }
    Ok(())
}
