use serde::{Deserialize, Serialize};

/// Mod files installed on the game server, newest listing first.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModListingDto {
    pub updated_at: String,
    pub mods: Vec<String>,
}

impl ModListingDto {
    /// Substitute listing shown in fallback mode or after a failed fetch.
    pub fn fallback() -> Self {
        Self {
            updated_at: "2026-01-02T17:15:11Z".to_string(),
            mods: vec![
                "gravestone-1.21.1.jar".to_string(),
                "pingwheel-1.21.1.jar".to_string(),
                "sodium-0.6.0.jar".to_string(),
                "lithium-0.14.3.jar".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listing_payload() {
        let payload = r#"{"updatedAt": "2026-01-02T17:15:11Z", "mods": ["sodium-0.6.0.jar"]}"#;
        let listing: ModListingDto = serde_json::from_str(payload).unwrap();
        assert_eq!(listing.mods.len(), 1);
        assert_eq!(listing.updated_at, "2026-01-02T17:15:11Z");
    }
}
