use web_sys::window;

const AUTH_TOKEN_KEY: &str = "auth_token";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the session token to localStorage
pub fn save_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(AUTH_TOKEN_KEY, token);
    }
}

/// Get the session token from localStorage
pub fn get_token() -> Option<String> {
    local_storage()?.get_item(AUTH_TOKEN_KEY).ok()?
}

/// Clear the session token
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(AUTH_TOKEN_KEY);
    }
}
