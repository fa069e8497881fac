use crate::client::config::Endpoints;

use super::helper::get;

/// One GET against the health endpoint: up only on HTTP 200, any other
/// status or transport failure means down. Never errors. Unlike every
/// other fetcher this ignores fallback mode, because its result is what
/// fixes the flag at boot.
pub async fn probe_health(endpoints: &Endpoints) -> bool {
    match get(&endpoints.health()).send().await {
        Ok(response) => response.status() == 200,
        Err(_) => false,
    }
}
