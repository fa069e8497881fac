use dioxus_logger::tracing;

use crate::{
    client::{config::Endpoints, model::error::ApiError},
    model::auth::SessionDto,
};

use super::helper::{get, parse_message, parse_response, send_request};

/// Ask the backend for the OAuth provider URL and navigate the whole page
/// there. The provider hands the user back to the callback route.
pub async fn begin_login(endpoints: &Endpoints) -> Result<(), ApiError> {
    let response = send_request(get(&endpoints.login())).await?;
    let target = parse_message(response).await?;

    gloo_utils::window()
        .location()
        .set_href(&target)
        .map_err(|_| ApiError::Network("browser refused the login redirect".to_string()))
}

/// Central 401 handling: kick off the provider redirect; the triggering
/// call still resolves to `AuthRequired`.
pub async fn redirect_to_login(endpoints: &Endpoints) {
    if let Err(error) = begin_login(endpoints).await {
        tracing::error!("login redirect failed: {error}");
    }
}

/// Exchange the authorization code delivered on the callback route for a
/// token and user id.
pub async fn complete_login(endpoints: &Endpoints, code: &str) -> Result<SessionDto, ApiError> {
    let response = send_request(get(&endpoints.login_callback(code))).await?;
    parse_response(response).await
}
