use serde::Serialize;

use crate::category::ProductCategory;

/// Identifier of a product. Unique and stable within a catalog.
pub type ProductId = u32;

/// A product record as listed in the catalog.
///
/// Records are built once when the catalog is constructed and never change.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    pub category: ProductCategory,
    /// Preformatted for display, e.g. `"$15.99"`.
    pub price: &'static str,
    pub image: &'static str,
    pub is_organic: bool,
    pub description: &'static str,
}
