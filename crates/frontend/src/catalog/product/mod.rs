pub mod api;
pub mod ui;

use contracts::catalog::{parse_commission, BulkCommissionUpdate, CommissionParseError, Product};

use crate::shared::list_utils::{filter_list, Searchable};
use crate::shared::selection::Selection;

impl Searchable for Product {
    /// A product matches when its name contains the query
    /// (case-insensitive) or its price string contains the query.
    fn matches_filter(&self, filter: &str) -> bool {
        let name_match = self.name.to_lowercase().contains(&filter.to_lowercase());
        let price_match = self.price.to_string().contains(filter);
        name_match || price_match
    }
}

/// Visible subset of the product list for a search query.
pub fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    filter_list(products, query)
}

/// Flip a commission type between percentage (0) and fixed (1).
/// Out-of-range values normalize into the two valid states.
pub fn toggle_commission_type(commission_type: u8) -> u8 {
    (commission_type % 2) ^ 1
}

/// Build the bulk-update request for the current selection.
pub fn plan_bulk_update(
    selection: &Selection,
    input: &str,
) -> Result<BulkCommissionUpdate, CommissionParseError> {
    let commission = parse_commission(input)?;
    Ok(BulkCommissionUpdate {
        selected_resources: selection.ids(),
        commission,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: "General".to_string(),
            price,
            currency: "$".to_string(),
            commission: 5.0,
            commission_type: 0,
            image: String::new(),
        }
    }

    #[test]
    fn test_empty_query_returns_all() {
        let products = vec![product("p1", "Keyboard", 49.9), product("p2", "Mouse", 19.0)];
        assert_eq!(filter_products(&products, ""), products);
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let products = vec![
            product("p1", "Keyboard", 49.9),
            product("p2", "Mouse", 19.0),
            product("p3", "keycap set", 25.0),
        ];
        let visible = filter_products(&products, "KEY");
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.name.to_lowercase().contains("key")));
    }

    #[test]
    fn test_price_substring_match() {
        let products = vec![product("p1", "Keyboard", 49.9), product("p2", "Mouse", 19.0)];
        let visible = filter_products(&products, "49");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "p1");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let products = vec![product("p1", "Keyboard", 49.9)];
        assert!(filter_products(&products, "zzz").is_empty());
    }

    #[test]
    fn test_plan_bulk_update_carries_selection_and_value() {
        let mut selection = Selection::new();
        selection.toggle("p2");
        selection.toggle("p1");

        let update = plan_bulk_update(&selection, "12.5").unwrap();
        assert_eq!(
            update.selected_resources,
            vec!["p1".to_string(), "p2".to_string()]
        );
        assert_eq!(update.commission, 12.5);

        // Simulated success clears the selection
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_commission_type_alternates() {
        assert_eq!(toggle_commission_type(0), 1);
        assert_eq!(toggle_commission_type(1), 0);
        assert_eq!(toggle_commission_type(toggle_commission_type(0)), 0);
    }

    #[test]
    fn test_toggle_commission_type_normalizes_out_of_range() {
        assert_eq!(toggle_commission_type(254), 1);
        assert_eq!(toggle_commission_type(u8::MAX), 0);
    }

    #[test]
    fn test_plan_bulk_update_rejects_bad_input() {
        let mut selection = Selection::new();
        selection.toggle("p1");
        assert!(plan_bulk_update(&selection, "abc").is_err());
        assert!(plan_bulk_update(&selection, "-2").is_err());
    }
}
