/// List helpers shared by the table pages (text search, search input).
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Tables render at most this many rows.
pub const MAX_ROWS: usize = 10;

/// Trait for row types that support free-text search.
pub trait Searchable {
    /// Does this row match the search query?
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Filter a list by a search query. Only a literally empty query returns
/// everything; whitespace is matched like any other character.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Search input with debounce and a clear button.
#[component]
pub fn SearchInput(
    /// Current filter value (for highlighting the active state)
    #[prop(into)]
    value: Signal<String>,
    /// Callback invoked after the debounce window
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local state for the input, ahead of the debounce
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Only the latest generation fires the callback
    let generation = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let current = generation.get_value() + 1;
        generation.set_value(current);
        spawn_local(async move {
            TimeoutFuture::new(300).await;
            // None means the view was torn down while the timer ran
            if generation.try_get_value() == Some(current) {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        generation.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || {
                if !input_value.get().is_empty() {
                    view! {
                        <button class="search-clear" title="Clear" on:click=clear_filter>
                            "x"
                        </button>
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Named(&'static str);

    impl Searchable for Named {
        fn matches_filter(&self, filter: &str) -> bool {
            self.0.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    #[test]
    fn test_filter_list_empty_query_returns_all() {
        let items = vec![Named("alpha"), Named("beta")];
        assert_eq!(filter_list(&items, "").len(), 2);
    }

    #[test]
    fn test_filter_list_whitespace_query_matches_literally() {
        let items = vec![Named("alpha"), Named("key cap")];
        let filtered = filter_list(&items, " ");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].0, "key cap");
    }

    #[test]
    fn test_debounce_generation_gone_after_teardown() {
        let owner = Owner::new();
        let generation = owner.with(|| StoredValue::new(0u64));
        assert_eq!(generation.try_get_value(), Some(0));

        owner.cleanup();
        assert_eq!(generation.try_get_value(), None);
    }

    #[test]
    fn test_filter_list_keeps_only_matches() {
        let items = vec![Named("alpha"), Named("beta"), Named("Alphabet")];
        let filtered = filter_list(&items, "ALPHA");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|n| n.matches_filter("alpha")));
    }
}
