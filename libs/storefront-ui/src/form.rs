use domain_products::Product;
use serde::{Deserialize, Serialize};

/// Values edited by the product form.
///
/// The form owns field editing; the modal only passes this through to the
/// submit handler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFormData {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image: String,
    pub stock: i64,
}

impl From<&Product> for ProductFormData {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name().unwrap_or_default().to_string(),
            description: product.description().unwrap_or_default().to_string(),
            category: product.category().unwrap_or_default().to_string(),
            price: product.price().unwrap_or_default(),
            image: product.image().unwrap_or_default().to_string(),
            stock: product.stock().unwrap_or_default(),
        }
    }
}
