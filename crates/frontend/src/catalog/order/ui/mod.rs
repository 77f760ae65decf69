use contracts::catalog::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::order::api;
use crate::layout::DashboardLayout;
use crate::routes::routes::api as endpoints;
use crate::shared::fetch::{cache_get, FetchScope, LoadState};
use crate::shared::list_utils::MAX_ROWS;

/// Read-only order table. No mutation is supported for orders.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let initial = match cache_get::<Vec<Order>>(&endpoints::orders()) {
        Some(cached) => LoadState::Ready(cached),
        None => LoadState::Loading,
    };
    let (orders, set_orders) = signal(initial);

    let scope = FetchScope::new();
    spawn_local(async move {
        let result = api::fetch_orders().await;
        if !scope.is_alive() {
            return;
        }
        if let Err(e) = &result {
            log::error!("order list load failed: {}", e);
        }
        set_orders.set(LoadState::from_result(result));
    });

    view! {
        <DashboardLayout title="Orders">
            {move || match orders.get() {
                LoadState::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                LoadState::Error(_) => {
                    view! { <p class="error">"Something went wrong, contact support"</p> }
                        .into_any()
                }
                LoadState::Ready(items) => {
                    view! {
                        <div class="card">
                            <div class="table-container">
                                <table>
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Category"</th>
                                            <th>"Price"</th>
                                            <th>"Commission %"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {items
                                            .iter()
                                            .take(MAX_ROWS)
                                            .map(|order| {
                                                view! {
                                                    <tr>
                                                        <td class="name-cell">
                                                            <img
                                                                src=order.image.clone()
                                                                alt="image"
                                                                width="24"
                                                                height="24"
                                                            />
                                                            {order.name.clone()}
                                                        </td>
                                                        <td>{order.category.clone()}</td>
                                                        <td>
                                                            {format!("{}{}", order.currency, order.price)}
                                                        </td>
                                                        <td>{order.commission}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </DashboardLayout>
    }
}
