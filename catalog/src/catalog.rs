//! The product catalog and the category filter over it.

use std::sync::Arc;

use crate::category::CategoryId;
use crate::category::ProductCategory;
use crate::product::Product;

/// Returns the products that belong under `selection`, in their original order.
///
/// `All` returns every product. `Organic` keeps products flagged organic
/// whatever their shelf. Any other key keeps products on that shelf.
pub fn filter(products: &[Product], selection: CategoryId) -> Vec<Product> {
    if selection.is_all() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|product| selection.matches(product))
        .copied()
        .collect()
}

/// An immutable, ordered list of products.
///
/// Cloning is cheap; all clones share the same list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog(Arc<[Product]>);

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self(products.into())
    }

    pub fn products(&self) -> &[Product] {
        &self.0
    }

    pub fn filter(&self, selection: CategoryId) -> Vec<Product> {
        filter(&self.0, selection)
    }

    /// The six products sold on the Spice Delights site.
    pub fn spice_delights() -> Self {
        Self::new(vec![
            Product {
                id: 1,
                name: "Premium Saffron",
                category: ProductCategory::WholeSpices,
                price: "$15.99",
                image: "https://images.pexels.com/photos/4198843/pexels-photo-4198843.jpeg",
                is_organic: true,
                description: "Hand-picked premium quality saffron threads",
            },
            Product {
                id: 2,
                name: "Ground Turmeric",
                category: ProductCategory::GroundSpices,
                price: "$9.99",
                image: "https://images.pexels.com/photos/4198019/pexels-photo-4198019.jpeg",
                is_organic: true,
                description: "Pure organic ground turmeric root",
            },
            Product {
                id: 3,
                name: "Garam Masala",
                category: ProductCategory::Blends,
                price: "$12.99",
                image: "https://images.pexels.com/photos/6401669/pexels-photo-6401669.jpeg",
                is_organic: false,
                description: "Traditional Indian spice blend",
            },
            Product {
                id: 4,
                name: "Black Peppercorns",
                category: ProductCategory::WholeSpices,
                price: "$8.99",
                image: "https://images.pexels.com/photos/4198023/pexels-photo-4198023.jpeg",
                is_organic: true,
                description: "Premium black peppercorns",
            },
            Product {
                id: 5,
                name: "Cinnamon Sticks",
                category: ProductCategory::WholeSpices,
                price: "$7.99",
                image: "https://images.pexels.com/photos/65882/chocolate-dark-coffee-confiserie-65882.jpeg",
                is_organic: true,
                description: "Ceylon cinnamon sticks",
            },
            Product {
                id: 6,
                name: "Curry Powder",
                category: ProductCategory::Blends,
                price: "$10.99",
                image: "https://images.pexels.com/photos/2802527/pexels-photo-2802527.jpeg",
                is_organic: false,
                description: "Traditional curry powder blend",
            },
        ])
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::spice_delights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductId;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    fn ids(products: &[Product]) -> Vec<ProductId> {
        products.iter().map(|p| p.id).collect()
    }

    fn is_subsequence(sub: &[Product], full: &[Product]) -> bool {
        let mut rest = full.iter();
        sub.iter().all(|wanted| rest.any(|p| p == wanted))
    }

    #[test]
    fn all_returns_the_input_unchanged() {
        let catalog = Catalog::spice_delights();
        assert_eq!(catalog.filter(CategoryId::All), catalog.products());
    }

    #[test]
    fn organic_ignores_the_shelf() {
        let catalog = Catalog::spice_delights();
        assert_eq!(ids(&catalog.filter(CategoryId::Organic)), [1, 2, 4, 5]);
    }

    #[test]
    fn shelves_filter_on_category() {
        let catalog = Catalog::spice_delights();
        assert_eq!(ids(&catalog.filter(CategoryId::Blends)), [3, 6]);
        assert_eq!(ids(&catalog.filter(CategoryId::WholeSpices)), [1, 4, 5]);
        assert_eq!(ids(&catalog.filter(CategoryId::GroundSpices)), [2]);
    }

    #[test]
    fn every_result_is_an_ordered_subsequence_matching_the_key() {
        let catalog = Catalog::spice_delights();
        for key in CategoryId::iter() {
            let visible = catalog.filter(key);
            assert!(is_subsequence(&visible, catalog.products()), "{key}");
            assert!(visible.iter().all(|p| key.matches(p)), "{key}");
        }
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let catalog = Catalog::spice_delights();
        for key in CategoryId::iter() {
            let once = catalog.filter(key);
            assert_eq!(filter(&once, key), once, "{key}");
        }
    }

    #[test]
    fn empty_input_gives_empty_output() {
        for key in CategoryId::iter() {
            assert!(filter(&[], key).is_empty());
        }
    }

    #[test]
    fn ids_are_unique() {
        let catalog = Catalog::spice_delights();
        let unique: HashSet<_> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(unique.len(), catalog.products().len());
    }
}
