use contracts::system::auth::{AuthResponse, LoginRequest, SignupRequest};

use crate::routes::routes::api;
use crate::shared::fetch::post_json;

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<AuthResponse, String> {
    let request = LoginRequest { email, password };
    post_json(&api::login(), &request).await
}

/// Create an account
pub async fn signup(name: String, email: String, password: String) -> Result<AuthResponse, String> {
    let request = SignupRequest {
        name,
        email,
        password,
    };
    post_json(&api::signup(), &request).await
}
