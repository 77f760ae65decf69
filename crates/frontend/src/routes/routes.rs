//! Route table: client-side paths and remote API endpoints.

/// Client-side navigation paths.
pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/auth/login";
    pub const SIGNUP: &str = "/auth/signup";
    pub const LOGOUT: &str = "/api/auth/logout";
    pub const DASHBOARD: &str = "/dashboard";
    pub const CALCULATOR: &str = "/dashboard/calculator";
    pub const PRODUCTS: &str = "/dashboard/products";
    pub const ORDERS: &str = "/dashboard/orders";
}

/// Get the base URL for API requests
///
/// Taken from the `API_BASE_URL` environment variable at build time when
/// set; otherwise constructed from the current window location, using
/// port 3000 for the backend server.
pub fn api_base() -> String {
    if let Some(base) = option_env!("API_BASE_URL") {
        return base.trim_end_matches('/').to_string();
    }
    #[cfg(target_arch = "wasm32")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return String::new(),
        };
        let location = window.location();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let hostname = location
            .hostname()
            .unwrap_or_else(|_| "127.0.0.1".to_string());
        format!("{}//{}:3000", protocol, hostname)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// Remote REST endpoints, parameterized by [`api_base`].
pub mod api {
    use super::api_base;

    pub fn products() -> String {
        format!("{}/products", api_base())
    }

    pub fn product(id: &str) -> String {
        format!("{}/products/{}", api_base(), id)
    }

    /// Bulk commission update endpoint.
    pub fn products_many() -> String {
        format!("{}/products/many", api_base())
    }

    pub fn orders() -> String {
        format!("{}/orders", api_base())
    }

    pub fn login() -> String {
        format!("{}/auth/login", api_base())
    }

    pub fn signup() -> String {
        format!("{}/auth/signup", api_base())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Off the wasm target there is no window, so the fallback base is empty
    // unless API_BASE_URL was set for the build.

    #[test]
    fn test_product_endpoint_embeds_id() {
        assert!(api::product("p1").ends_with("/products/p1"));
    }

    #[test]
    fn test_bulk_endpoint_is_products_many() {
        assert!(api::products_many().ends_with("/products/many"));
    }

    #[test]
    fn test_client_paths() {
        assert_eq!(paths::PRODUCTS, "/dashboard/products");
        assert_eq!(paths::LOGOUT, "/api/auth/logout");
    }
}
