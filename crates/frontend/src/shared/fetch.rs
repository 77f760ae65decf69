//! Data fetcher: JSON request helpers over `gloo_net` plus a small
//! URL-keyed cache for stale-while-revalidate page mounts.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Per-view fetch state machine: `loading -> ready | error`.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Error(String),
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(message) => LoadState::Error(message),
        }
    }
}

thread_local! {
    static CACHE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
}

/// Decoded copy of the last GET response for this URL, if any.
pub fn cache_get<T: DeserializeOwned>(url: &str) -> Option<T> {
    CACHE
        .with(|cache| cache.borrow().get(url).cloned())
        .and_then(|text| serde_json::from_str(&text).ok())
}

fn cache_put(url: &str, body: &str) {
    CACHE.with(|cache| {
        cache.borrow_mut().insert(url.to_string(), body.to_string());
    });
}

/// Drop a cached entry so the next mount loads fresh data.
pub fn invalidate(url: &str) {
    CACHE.with(|cache| {
        cache.borrow_mut().remove(url);
    });
}

/// GET a JSON resource. The raw body is kept in the cache keyed by URL.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    let data: T =
        serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))?;
    cache_put(url, &text);
    Ok(data)
}

/// PATCH a JSON body. The response body is ignored.
pub async fn patch_json<B: Serialize>(url: &str, body: &B) -> Result<(), String> {
    let response = Request::patch(url)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

/// POST a JSON body and decode the JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, String> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Ties in-flight requests to a view's lifetime. A response that arrives
/// after the owning view was torn down must be discarded by the caller.
#[derive(Clone)]
pub struct FetchScope {
    // `on_cleanup` demands Send + Sync even on wasm
    alive: Arc<AtomicBool>,
}

impl FetchScope {
    /// Registers with `on_cleanup`, so it has to be created inside a
    /// reactive owner (a component body).
    pub fn new() -> Self {
        let alive = Arc::new(AtomicBool::new(true));
        let flag = alive.clone();
        leptos::prelude::on_cleanup(move || flag.store(false, Ordering::Relaxed));
        Self { alive }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

impl Default for FetchScope {
    fn default() -> Self {
        Self::new()
    }
}
