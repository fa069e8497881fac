use serde::Deserialize;

use crate::client::model::error::ApiError;

use super::helper::{get, parse_response, send_request};

/// Public IP discovery goes to an external service, independent of the
/// dashboard backend and of fallback mode.
const USER_IP_URL: &str = "https://api.ipify.org?format=json";

#[derive(Deserialize)]
struct UserIpDto {
    ip: String,
}

pub async fn fetch_user_ip() -> Result<String, ApiError> {
    let response = send_request(get(USER_IP_URL)).await?;
    let dto: UserIpDto = parse_response(response).await?;
    Ok(dto.ip)
}
