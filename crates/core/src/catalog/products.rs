//! Products

use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;
use smallvec::SmallVec;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Number of related products shown alongside a product.
pub const RELATED_PRODUCTS_LIMIT: usize = 3;

/// A product sold in the shop.
#[derive(Debug, Clone)]
pub struct Product {
    /// URL-friendly identifier, also the cart line item identifier
    pub slug: String,

    /// Product name
    pub name: String,

    /// Botanical name of the main herb, if any
    pub latin_name: Option<String>,

    /// Shop category, e.g. `Tinctures`
    pub category: String,

    /// Health concerns the product is aimed at
    pub concerns: SmallVec<[String; 4]>,

    /// Card blurb
    pub short_description: String,

    /// Full product page description
    pub description: String,

    /// Ingredients list
    pub ingredients: String,

    /// Directions for use
    pub usage: String,

    /// Product price
    pub price: Money<'static, Currency>,

    /// Image URL
    pub image: String,

    /// Slug of the practitioner who recommends this product
    pub recommended_by: Option<String>,
}

/// Shop filter selections.
///
/// Within a dimension selections are OR'd; across dimensions they are AND'd. An empty dimension
/// matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Selected categories
    pub categories: Vec<String>,

    /// Selected concerns
    pub concerns: Vec<String>,
}

impl ProductFilter {
    /// Whether the filter has any selections.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.concerns.is_empty()
    }

    /// Check a product against the selections.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }

        if !self.concerns.is_empty()
            && !product
                .concerns
                .iter()
                .any(|concern| self.concerns.contains(concern))
        {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;

    use super::*;

    fn product(category: &str, concerns: &[&str]) -> Product {
        Product {
            slug: "test".to_string(),
            name: "Test".to_string(),
            latin_name: None,
            category: category.to_string(),
            concerns: concerns.iter().map(ToString::to_string).collect(),
            short_description: String::new(),
            description: String::new(),
            ingredients: String::new(),
            usage: String::new(),
            price: Money::from_minor(1200, GBP),
            image: String::new(),
            recommended_by: None,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = ProductFilter::default();

        assert!(filter.is_empty());
        assert!(filter.matches(&product("Teas", &[])));
    }

    #[test]
    fn category_selection_is_ored() {
        let filter = ProductFilter {
            categories: vec!["Teas".to_string(), "Tinctures".to_string()],
            concerns: Vec::new(),
        };

        assert!(filter.matches(&product("Teas", &[])));
        assert!(filter.matches(&product("Tinctures", &[])));
        assert!(!filter.matches(&product("Capsules", &[])));
    }

    #[test]
    fn concern_selection_needs_one_shared_concern() {
        let filter = ProductFilter {
            categories: Vec::new(),
            concerns: vec!["Sleep".to_string()],
        };

        assert!(filter.matches(&product("Teas", &["Stress", "Sleep"])));
        assert!(!filter.matches(&product("Teas", &["Digestion"])));
    }

    #[test]
    fn dimensions_are_anded() {
        let filter = ProductFilter {
            categories: vec!["Teas".to_string()],
            concerns: vec!["Sleep".to_string()],
        };

        assert!(filter.matches(&product("Teas", &["Sleep"])));
        assert!(!filter.matches(&product("Tinctures", &["Sleep"])));
        assert!(!filter.matches(&product("Teas", &["Digestion"])));
    }
}
