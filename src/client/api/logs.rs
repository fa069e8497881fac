use dioxus_logger::tracing;

use crate::{
    client::{
        config::Endpoints,
        model::{cache::Sourced, error::ApiError, fallback::FallbackMode},
    },
    model::logs::LogsDto,
};

use super::helper::{get, parse_response, send_authed};

/// Tail the game-server process log. Requires a session and a resolved
/// server address; like the other read-only panels it degrades to sample
/// lines rather than going blank.
pub async fn fetch_logs(
    endpoints: &Endpoints,
    fallback: FallbackMode,
    token: &str,
    address: &str,
    lines: u32,
) -> Result<Sourced<LogsDto>, ApiError> {
    if fallback.active() {
        return Ok(Sourced::Substitute(LogsDto::fallback()));
    }

    match try_fetch(endpoints, token, address, lines).await {
        Ok(logs) => Ok(Sourced::Live(logs)),
        Err(ApiError::AuthRequired) => Err(ApiError::AuthRequired),
        Err(error) => {
            tracing::warn!("log tail degraded to sample data: {error}");
            Ok(Sourced::Substitute(LogsDto::fallback()))
        }
    }
}

async fn try_fetch(
    endpoints: &Endpoints,
    token: &str,
    address: &str,
    lines: u32,
) -> Result<LogsDto, ApiError> {
    let response = send_authed(get(&endpoints.logs(address, lines)), endpoints, token).await?;
    parse_response(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fallback_mode_short_circuits_to_substitute() {
        let endpoints = Endpoints::new("https://api.example.com");
        let sourced = fetch_logs(
            &endpoints,
            FallbackMode::from_probe(false),
            "token",
            "34.143.138.93",
            100,
        )
        .await
        .unwrap();

        assert!(sourced.is_substitute());
        assert_eq!(sourced.value(), LogsDto::fallback());
    }
}
