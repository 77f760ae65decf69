use contracts::catalog::{BulkCommissionUpdate, CommissionUpdate, Product};

use crate::routes::routes::api;
use crate::shared::fetch::{get_json, patch_json};

/// Load the product list.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    get_json(&api::products()).await
}

/// Update one product's commission.
pub async fn update_commission(id: &str, update: &CommissionUpdate) -> Result<(), String> {
    patch_json(&api::product(id), update).await
}

/// Apply one commission value to every selected product.
pub async fn bulk_update_commission(update: &BulkCommissionUpdate) -> Result<(), String> {
    patch_json(&api::products_many(), update).await
}
