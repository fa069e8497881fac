use dioxus_logger::tracing;

use crate::{
    client::{
        config::Endpoints,
        model::{cache::Sourced, error::ApiError, fallback::FallbackMode},
    },
    model::mods::ModListingDto,
};

use super::helper::{get, parse_message, parse_response, send_authed};

/// Where the download confirm lands while fallback data is shown.
const FALLBACK_DOWNLOAD_URL: &str = "https://www.youtube.com/watch?v=5YI9noRIjwo";

/// Fetch the installed-mod listing. Requires a session; a 401 redirects
/// to login and surfaces as `AuthRequired`, while network or parse
/// failures degrade to the sample listing.
pub async fn fetch_mod_list(
    endpoints: &Endpoints,
    fallback: FallbackMode,
    token: &str,
) -> Result<Sourced<ModListingDto>, ApiError> {
    if fallback.active() {
        return Ok(Sourced::Substitute(ModListingDto::fallback()));
    }

    match try_fetch(endpoints, token).await {
        Ok(listing) => Ok(Sourced::Live(listing)),
        Err(ApiError::AuthRequired) => Err(ApiError::AuthRequired),
        Err(error) => {
            tracing::warn!("mod list degraded to sample data: {error}");
            Ok(Sourced::Substitute(ModListingDto::fallback()))
        }
    }
}

async fn try_fetch(endpoints: &Endpoints, token: &str) -> Result<ModListingDto, ApiError> {
    let response = send_authed(get(&endpoints.mod_list()), endpoints, token).await?;
    parse_response(response).await
}

/// Request a short-lived download link for one mod file. The link expires
/// server-side after about five minutes. A 404 means the backend no
/// longer has the file and is reported as `NotFound`, distinct from
/// generic failure; download errors are never silently degraded.
pub async fn fetch_download_link(
    endpoints: &Endpoints,
    fallback: FallbackMode,
    token: &str,
    file: &str,
) -> Result<String, ApiError> {
    if fallback.active() {
        return Ok(FALLBACK_DOWNLOAD_URL.to_string());
    }

    let response = send_authed(get(&endpoints.mod_download(file)), endpoints, token).await?;
    let link = parse_message(response).await?;

    if !link.starts_with("https://") || link.contains(char::is_whitespace) {
        return Err(ApiError::Parse(format!(
            "invalid download link received for {file}"
        )));
    }

    Ok(link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fallback_mode_short_circuits_to_substitute() {
        let endpoints = Endpoints::new("https://api.example.com");
        let sourced = fetch_mod_list(&endpoints, FallbackMode::from_probe(false), "token")
            .await
            .unwrap();

        assert!(sourced.is_substitute());
        assert_eq!(sourced.value(), ModListingDto::fallback());
    }

    #[tokio::test]
    async fn fallback_download_link_is_the_fixed_literal() {
        let endpoints = Endpoints::new("https://api.example.com");
        let link = fetch_download_link(
            &endpoints,
            FallbackMode::from_probe(false),
            "token",
            "sodium-0.6.0.jar",
        )
        .await
        .unwrap();

        assert_eq!(link, FALLBACK_DOWNLOAD_URL);
    }
}
