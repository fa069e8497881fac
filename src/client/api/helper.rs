use reqwasm::http::{Method, Request, Response};
use serde::de::DeserializeOwned;

use crate::{
    client::{config::Endpoints, model::error::ApiError},
    model::api::MessageDto,
};

pub fn get(url: &str) -> Request {
    Request::get(url)
}

pub fn post(url: &str) -> Request {
    Request::post(url).header("Content-Type", "application/json")
}

pub fn patch(url: &str) -> Request {
    Request::new(url)
        .method(Method::PATCH)
        .header("Content-Type", "application/json")
}

pub fn bearer(request: Request, token: &str) -> Request {
    request.header("Authorization", &format!("Bearer {token}"))
}

/// Send a request, mapping transport failure to `ApiError::Network`.
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Send an authenticated request. A 401 fires the login redirect and
/// resolves to `AuthRequired`; callers must not retry past the redirect.
pub async fn send_authed(
    request: Request,
    endpoints: &Endpoints,
    token: &str,
) -> Result<Response, ApiError> {
    let response = send_request(bearer(request, token)).await?;
    if response.status() == 401 {
        super::auth::redirect_to_login(endpoints).await;
        return Err(ApiError::AuthRequired);
    }
    Ok(response)
}

/// Parse a 2xx JSON body into `T`; classify anything else into the error
/// taxonomy. A malformed success body is `ApiError::Parse`, never a
/// half-populated value.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if (200..300).contains(&status) {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    } else {
        let message = if let Ok(dto) = response.json::<MessageDto>().await {
            dto.message
        } else {
            response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string())
        };

        Err(ApiError::classify(status, message))
    }
}

/// Parse a `{ "message": ... }` body, the backend's shape for firewall,
/// login and RCON results.
pub async fn parse_message(response: Response) -> Result<String, ApiError> {
    parse_response::<MessageDto>(response)
        .await
        .map(|dto| dto.message)
}

pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::Parse(e.to_string()))
}
