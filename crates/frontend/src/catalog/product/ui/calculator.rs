use contracts::catalog::{parse_commission, Product};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::product::{api, toggle_commission_type};
use crate::layout::DashboardLayout;
use crate::routes::routes::api as endpoints;
use crate::shared::fetch::{cache_get, FetchScope, LoadState};

/// Commission calculator: the product table with a local-only commission
/// field and a commission-type toggle. Nothing here reaches the server.
#[component]
pub fn CalculatorPage() -> impl IntoView {
    let initial = match cache_get::<Vec<Product>>(&endpoints::products()) {
        Some(cached) => LoadState::Ready(cached),
        None => LoadState::Loading,
    };
    let (products, set_products) = signal(initial);

    let scope = FetchScope::new();
    spawn_local(async move {
        let result = api::fetch_products().await;
        if !scope.is_alive() {
            return;
        }
        if let Err(e) = &result {
            log::error!("product list load failed: {}", e);
        }
        set_products.set(LoadState::from_result(result));
    });

    let toggle_type = move |index: usize| {
        set_products.update(|state| {
            if let LoadState::Ready(items) = state {
                if let Some(product) = items.get_mut(index) {
                    product.commission_type = toggle_commission_type(product.commission_type);
                }
            }
        });
    };

    view! {
        <DashboardLayout title="Calculator">
            {move || match products.get() {
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
                                            .enumerate()
                                            .map(|(index, p)| {
                                                let type_label = if p.commission_type == 0 {
                                                    "%"
                                                } else {
                                                    "fixed"
                                                };
                                                view! {
                                                    <tr>
                                                        <td class="name-cell">
                                                            <img
                                                                src=p.image.clone()
                                                                alt="image"
                                                                width="24"
                                                                height="24"
                                                            />
                                                            {p.name.clone()}
                                                        </td>
                                                        <td>{p.category.clone()}</td>
                                                        <td>{format!("{}{}", p.currency, p.price)}</td>
                                                        <td>
                                                            <button
                                                                class="type-toggle"
                                                                title="Toggle commission type"
                                                                on:click=move |_| toggle_type(index)
                                                            >
                                                                {type_label}
                                                            </button>
                                                            <LocalCommissionField commission=p.commission />
                                                        </td>
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

/// Commission field whose edits stay local to the page.
#[component]
fn LocalCommissionField(commission: f64) -> impl IntoView {
    let previous = StoredValue::new(commission);
    let (value, set_value) = signal(commission.to_string());
    let (invalid, set_invalid) = signal(false);

    let handle_change = move |input: String| match parse_commission(&input) {
        Ok(parsed) => {
            previous.set_value(parsed);
            set_value.set(parsed.to_string());
            set_invalid.set(false);
        }
        Err(_) => {
            set_value.set(previous.get_value().to_string());
            set_invalid.set(true);
        }
    };

    view! {
        <input
            type="number"
            class=move || {
                if invalid.get() { "commission-input invalid" } else { "commission-input" }
            }
            prop:value=move || value.get()
            on:change=move |ev| handle_change(event_target_value(&ev))
        />
    }
}
