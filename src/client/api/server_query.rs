use dioxus_logger::tracing;

use crate::{
    client::{
        config::Endpoints,
        model::{cache::Sourced, error::ApiError, fallback::FallbackMode},
    },
    model::server_query::ServerQueryDto,
};

use super::helper::{get, parse_response, send_request};

/// Query the running game server for its MOTD and player list. Callers
/// gate this on a real public address; it is never invoked with an empty
/// or placeholder one.
pub async fn fetch_server_query(
    endpoints: &Endpoints,
    fallback: FallbackMode,
    address: &str,
) -> Sourced<ServerQueryDto> {
    if fallback.active() {
        return Sourced::Substitute(ServerQueryDto::fallback());
    }

    match try_fetch(endpoints, address).await {
        Ok(query) => Sourced::Live(query),
        Err(error) => {
            tracing::warn!("server query for {address} degraded to sample data: {error}");
            Sourced::Substitute(ServerQueryDto::fallback())
        }
    }
}

async fn try_fetch(endpoints: &Endpoints, address: &str) -> Result<ServerQueryDto, ApiError> {
    let response = send_request(get(&endpoints.server_query(address))).await?;
    parse_response(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fallback_mode_short_circuits_to_substitute() {
        let endpoints = Endpoints::new("https://api.example.com");
        let sourced =
            fetch_server_query(&endpoints, FallbackMode::from_probe(false), "34.143.138.93")
                .await;

        assert!(sourced.is_substitute());
        assert_eq!(sourced.value(), ServerQueryDto::fallback());
    }
}
