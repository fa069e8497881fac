use crate::{
    client::{
        config::Endpoints,
        model::{error::ApiError, fallback::FallbackMode},
    },
    model::firewall::{AddIpRequest, WhitelistStatus},
};

use super::helper::{get, parse_message, patch, send_authed, send_request, serialize_json};

/// Ask the backend to whitelist an address. The passcode travels in the
/// body; no bearer token is involved. Failures always surface.
pub async fn add_ip(endpoints: &Endpoints, request: &AddIpRequest) -> Result<String, ApiError> {
    let body = serialize_json(request)?;
    let response = send_request(patch(&endpoints.firewall_add_ip()).body(body)).await?;
    parse_message(response).await
}

/// Check whether an IP is on the firewall whitelist. Idempotent; safe to
/// re-run on demand.
pub async fn check_ip(
    endpoints: &Endpoints,
    fallback: FallbackMode,
    ip: &str,
) -> Result<WhitelistStatus, ApiError> {
    if fallback.active() {
        return Ok(WhitelistStatus::Absent);
    }

    let response = send_request(get(&endpoints.firewall_check_ip(ip))).await?;
    let message = parse_message(response).await?;
    Ok(WhitelistStatus::from_message(&message))
}

/// Drop every whitelisted address. 401 redirects to login; 403 carries
/// the server's refusal message.
pub async fn purge(endpoints: &Endpoints, token: &str) -> Result<String, ApiError> {
    let response = send_authed(patch(&endpoints.firewall_purge()), endpoints, token).await?;
    parse_message(response).await
}

/// Open the game server to all addresses.
pub async fn make_public(endpoints: &Endpoints, token: &str) -> Result<String, ApiError> {
    let response =
        send_authed(patch(&endpoints.firewall_make_public()), endpoints, token).await?;
    parse_message(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In fallback mode the check answers "absent" without a network
    /// call; the whitelist card is advisory-only until the backend is
    /// reachable again.
    #[tokio::test]
    async fn fallback_mode_reports_absent_without_network() {
        let endpoints = Endpoints::new("https://api.example.com");
        let status = check_ip(&endpoints, FallbackMode::from_probe(false), "203.0.113.7")
            .await
            .unwrap();

        assert_eq!(status, WhitelistStatus::Absent);
    }
}
