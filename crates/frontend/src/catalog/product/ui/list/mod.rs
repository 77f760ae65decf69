use contracts::catalog::{plan_commission_edit, Product};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::product::{api, filter_products, plan_bulk_update};
use crate::layout::DashboardLayout;
use crate::routes::routes::api as endpoints;
use crate::shared::fetch::{cache_get, invalidate, FetchScope, LoadState};
use crate::shared::list_utils::{SearchInput, MAX_ROWS};
use crate::shared::selection::Selection;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let products_url = endpoints::products();

    // Serve the cached copy immediately, then revalidate over the network
    let initial = match cache_get::<Vec<Product>>(&products_url) {
        Some(cached) => LoadState::Ready(cached),
        None => LoadState::Loading,
    };
    let (products, set_products) = signal(initial);
    let (filter_text, set_filter_text) = signal(String::new());
    let (banner_error, set_banner_error) = signal(Option::<String>::None);
    let selection = RwSignal::new(Selection::new());

    let scope = FetchScope::new();

    let fetch = {
        let scope = scope.clone();
        move || {
            let scope = scope.clone();
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
        }
    };

    let (bulk_value, set_bulk_value) = signal("0".to_string());
    let (bulk_in_flight, set_bulk_in_flight) = signal(false);

    let apply_bulk = {
        let scope = scope.clone();
        let fetch = fetch.clone();
        let products_url = products_url.clone();
        move || {
            // One bulk request in flight per view
            if bulk_in_flight.get_untracked() {
                return;
            }
            let planned = selection
                .with_untracked(|s| plan_bulk_update(s, &bulk_value.get_untracked()));
            let update = match planned {
                Ok(update) => update,
                Err(e) => {
                    set_banner_error.set(Some(e.to_string()));
                    return;
                }
            };
            if update.selected_resources.is_empty() {
                return;
            }
            set_banner_error.set(None);
            set_bulk_in_flight.set(true);

            let scope = scope.clone();
            let fetch = fetch.clone();
            let products_url = products_url.clone();
            spawn_local(async move {
                let result = api::bulk_update_commission(&update).await;
                if !scope.is_alive() {
                    return;
                }
                set_bulk_in_flight.set(false);
                match result {
                    Ok(()) => {
                        selection.update(|s| s.clear());
                        invalidate(&products_url);
                        fetch();
                    }
                    Err(e) => {
                        log::error!("bulk commission update failed: {}", e);
                        set_banner_error.set(Some(format!("Bulk update failed: {}", e)));
                    }
                }
            });
        }
    };

    fetch();

    view! {
        <DashboardLayout title="Products">
            {move || match products.get() {
                LoadState::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                LoadState::Error(_) => {
                    view! { <p class="error">"Something went wrong, contact support"</p> }
                        .into_any()
                }
                LoadState::Ready(items) => {
                    let apply_bulk = apply_bulk.clone();
                    let visible = filter_products(&items, &filter_text.get());
                    let header_rows = visible.clone();
                    let all_selected = selection.with(|s| s.all_selected_by(&visible, |p| &p.id));

                    view! {
                        <div class="card">
                            <div class="filter-bar">
                                <SearchInput
                                    value=filter_text
                                    on_change=Callback::new(move |val: String| {
                                        set_filter_text.set(val)
                                    })
                                    placeholder="Filter by name or price"
                                />
                            </div>

                            {move || {
                                banner_error
                                    .get()
                                    .map(|e| view! { <div class="error">{e}</div> })
                            }}

                            <div class="table-container">
                                <table>
                                    <thead>
                                        <tr>
                                            <th>
                                                <input
                                                    type="checkbox"
                                                    prop:checked=all_selected
                                                    on:change={
                                                        let rows = header_rows.clone();
                                                        move |_| {
                                                            selection
                                                                .update(|s| {
                                                                    if s.all_selected_by(&rows, |p| &p.id) {
                                                                        s.clear();
                                                                    } else {
                                                                        s.select_all_by(&rows, |p| &p.id);
                                                                    }
                                                                })
                                                        }
                                                    }
                                                />
                                            </th>
                                            <th>"Name"</th>
                                            <th>"Category"</th>
                                            <th>"Price"</th>
                                            <th>"Commission %"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {visible
                                            .iter()
                                            .take(MAX_ROWS)
                                            .map(|p| {
                                                let id = p.id.clone();
                                                let check_id = id.clone();
                                                let toggle_id = id.clone();
                                                view! {
                                                    <tr>
                                                        <td>
                                                            <input
                                                                type="checkbox"
                                                                prop:checked=move || {
                                                                    selection.with(|s| s.contains(&check_id))
                                                                }
                                                                on:change=move |_| {
                                                                    selection.update(|s| s.toggle(&toggle_id))
                                                                }
                                                            />
                                                        </td>
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
                                                            <CommissionCell
                                                                id=id
                                                                commission=p.commission
                                                                on_error=Callback::new(move |e: Option<String>| {
                                                                    set_banner_error.set(e)
                                                                })
                                                            />
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </div>

                            {move || {
                                let count = selection.with(|s| s.len());
                                if count == 0 {
                                    return view! { <></> }.into_any();
                                }
                                let apply_bulk = apply_bulk.clone();
                                view! {
                                    <div class="bulk-bar">
                                        <span>{format!("{} selected", count)}</span>
                                        <input
                                            type="number"
                                            prop:value=move || bulk_value.get()
                                            on:input=move |ev| {
                                                set_bulk_value.set(event_target_value(&ev))
                                            }
                                        />
                                        <button
                                            on:click=move |_| apply_bulk()
                                            disabled=move || bulk_in_flight.get()
                                        >
                                            "Apply to selected products"
                                        </button>
                                        <button on:click=move |_| {
                                            selection.update(|s| s.clear())
                                        }>"Clear"</button>
                                    </div>
                                }
                                    .into_any()
                            }}
                        </div>
                    }
                        .into_any()
                }
            }}
        </DashboardLayout>
    }
}

/// Editable commission field for one product row.
///
/// Issues a PATCH only when the parsed value differs from the previous
/// one. A failed request reverts the field and reports the error.
#[component]
fn CommissionCell(
    id: String,
    commission: f64,
    #[prop(into)] on_error: Callback<Option<String>>,
) -> impl IntoView {
    let previous = StoredValue::new(commission);
    let (value, set_value) = signal(commission.to_string());
    let scope = FetchScope::new();

    let handle_change = move |input: String| {
        let prev = previous.get_value();
        match plan_commission_edit(prev, &input) {
            Ok(Some(update)) => {
                set_value.set(update.commission.to_string());
                on_error.run(None);
                let id = id.clone();
                let scope = scope.clone();
                spawn_local(async move {
                    match api::update_commission(&id, &update).await {
                        Ok(()) => {
                            if scope.is_alive() {
                                previous.set_value(update.commission);
                            }
                        }
                        Err(e) => {
                            log::error!("commission update failed for {}: {}", id, e);
                            if scope.is_alive() {
                                set_value.set(prev.to_string());
                                on_error.run(Some(format!("Commission update failed: {}", e)));
                            }
                        }
                    }
                });
            }
            Ok(None) => {
                set_value.set(prev.to_string());
            }
            Err(e) => {
                set_value.set(prev.to_string());
                on_error.run(Some(e.to_string()));
            }
        }
    };

    view! {
        <input
            type="number"
            class="commission-input"
            prop:value=move || value.get()
            on:change=move |ev| handle_change(event_target_value(&ev))
        />
    }
}
