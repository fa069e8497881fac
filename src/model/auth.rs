use serde::{Deserialize, Serialize};

/// Token and user id returned by the OAuth callback exchange.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SessionDto {
    pub token: String,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_callback_payload() {
        let payload = r#"{"token": "opaque-bearer", "id": "1048293"}"#;
        let session: SessionDto = serde_json::from_str(payload).unwrap();
        assert_eq!(session.token, "opaque-bearer");
        assert_eq!(session.id, "1048293");
    }
}
