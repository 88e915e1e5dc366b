use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::api_utils::{ApiClient, ApiError};

/// Login with username and password.
///
/// Any non-2xx answer comes back as [`ApiError::Status`].
pub async fn login(
    api: &ApiClient,
    username: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    api.post_json("/auth/login", &request).await
}
