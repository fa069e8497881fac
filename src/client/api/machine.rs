use dioxus_logger::tracing;

use crate::{
    client::{
        config::Endpoints,
        model::{cache::Sourced, error::ApiError, fallback::FallbackMode},
    },
    model::machine::VmDetailsDto,
};

use super::helper::{get, parse_response, send_request};

/// Fetch the VM attributes, substituting the sample instance in fallback
/// mode or when the live fetch fails, so the details card is never blank.
pub async fn fetch_vm_details(
    endpoints: &Endpoints,
    fallback: FallbackMode,
) -> Sourced<VmDetailsDto> {
    if fallback.active() {
        return Sourced::Substitute(VmDetailsDto::fallback());
    }

    match try_fetch(endpoints).await {
        Ok(details) => Sourced::Live(details),
        Err(error) => {
            tracing::warn!("VM details degraded to sample data: {error}");
            Sourced::Substitute(VmDetailsDto::fallback())
        }
    }
}

async fn try_fetch(endpoints: &Endpoints) -> Result<VmDetailsDto, ApiError> {
    let response = send_request(get(&endpoints.machine())).await?;
    parse_response(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    /// With the fallback flag set the fetcher must answer from the
    /// predefined literal without touching the network.
    #[tokio::test]
    async fn fallback_mode_short_circuits_to_substitute() {
        let endpoints = Endpoints::new("https://api.example.com");
        let sourced = fetch_vm_details(&endpoints, FallbackMode::from_probe(false)).await;

        assert!(sourced.is_substitute());
        assert_eq!(sourced.value(), VmDetailsDto::fallback());
    }
}
