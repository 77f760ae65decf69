use contracts::catalog::Order;

use crate::routes::routes::api;
use crate::shared::fetch::get_json;

/// Load the order list. Orders are display-only.
pub async fn fetch_orders() -> Result<Vec<Order>, String> {
    get_json(&api::orders()).await
}
