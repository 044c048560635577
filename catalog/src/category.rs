//! Product categories and the filter keys shown on the catalog page.

use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::product::Product;

/// The shelf a product sits on. Every product has exactly one.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, strum::EnumIter, strum::EnumString, strum::IntoStaticStr, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ProductCategory {
    WholeSpices,
    GroundSpices,
    Blends,
}

/// A filter key for the catalog.
///
/// `All` is the sentinel meaning "no filtering". `Organic` filters on the
/// organic flag instead of the category field, so an organic blend shows up
/// under both `Blends` and `Organic`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default, Serialize, Deserialize, strum::EnumIs, strum::EnumIter, strum::EnumString, strum::IntoStaticStr, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CategoryId {
    #[default]
    All,
    WholeSpices,
    GroundSpices,
    Blends,
    Organic,
}

impl CategoryId {
    /// The kebab-case identifier, e.g. `"whole-spices"`.
    pub fn id(&self) -> &'static str {
        self.into()
    }

    /// Display label for the category control.
    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "All Products",
            Self::WholeSpices => "Whole Spices",
            Self::GroundSpices => "Ground Spices",
            Self::Blends => "Spice Blends",
            Self::Organic => "Organic",
        }
    }

    /// True if `product` belongs under this key.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Organic => product.is_organic,
            Self::WholeSpices => product.category == ProductCategory::WholeSpices,
            Self::GroundSpices => product.category == ProductCategory::GroundSpices,
            Self::Blends => product.category == ProductCategory::Blends,
        }
    }
}

impl From<ProductCategory> for CategoryId {
    fn from(category: ProductCategory) -> Self {
        match category {
            ProductCategory::WholeSpices => Self::WholeSpices,
            ProductCategory::GroundSpices => Self::GroundSpices,
            ProductCategory::Blends => Self::Blends,
        }
    }
}

/// A category control: its key and label.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: &'static str,
}

impl From<CategoryId> for Category {
    fn from(id: CategoryId) -> Self {
        Self { id, name: id.name() }
    }
}

/// All category controls in display order, starting with "all".
pub fn categories() -> Vec<Category> {
    CategoryId::iter().map(Category::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn five_categories_in_display_order() {
        let ids: Vec<&str> = categories().iter().map(|c| c.id.id()).collect();
        assert_eq!(
            ids,
            ["all", "whole-spices", "ground-spices", "blends", "organic"]
        );
        assert_eq!(categories()[3].name, "Spice Blends");
    }

    #[test]
    fn ids_parse_from_their_string_form() {
        for id in CategoryId::iter() {
            assert_eq!(CategoryId::from_str(id.id()), Ok(id));
            assert_eq!(id.to_string(), id.id());
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert!(CategoryId::from_str("gift-sets").is_err());
        assert!(CategoryId::from_str("").is_err());
    }

    #[test]
    fn default_selection_is_all() {
        assert!(CategoryId::default().is_all());
    }

    #[test]
    fn every_shelf_has_a_filter_key() {
        for shelf in ProductCategory::iter() {
            let key = CategoryId::from(shelf);
            assert_eq!(key.id(), <&'static str>::from(shelf));
        }
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&CategoryId::GroundSpices).unwrap();
        assert_eq!(json, "\"ground-spices\"");
    }
}
