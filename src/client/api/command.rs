use crate::{
    client::{
        config::Endpoints,
        model::{error::ApiError, fallback::FallbackMode},
    },
    model::command::CommandRequest,
};

use super::helper::{parse_message, post, send_authed, serialize_json};

/// Canned response while fallback data is shown; the console UI disables
/// itself in fallback mode, so this is only reachable programmatically.
const FALLBACK_RESPONSE: &str = "test";

/// Submit an admin command to the RCON execution endpoint. Requires a
/// session; failures are always surfaced to the caller, classified as
/// bad-arguments, forbidden, needs-login or generic.
pub async fn execute(
    endpoints: &Endpoints,
    fallback: FallbackMode,
    token: &str,
    address: &str,
    request: &CommandRequest,
) -> Result<String, ApiError> {
    if fallback.active() {
        return Ok(FALLBACK_RESPONSE.to_string());
    }

    let body = serialize_json(request)?;
    let response = send_authed(
        post(&endpoints.command_exec(address)).body(body),
        endpoints,
        token,
    )
    .await?;
    parse_message(response).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::command::command_by_key;

    #[tokio::test]
    async fn fallback_mode_answers_without_network() {
        let endpoints = Endpoints::new("https://api.example.com");
        let request = command_by_key("SAY")
            .unwrap()
            .request(vec!["hello".to_string()]);

        let message = execute(
            &endpoints,
            FallbackMode::from_probe(false),
            "token",
            "34.143.138.93",
            &request,
        )
        .await
        .unwrap();

        assert_eq!(message, FALLBACK_RESPONSE);
    }
}
