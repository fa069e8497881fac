use serde::{Deserialize, Serialize};

/// Game-server status as reported by the query endpoint: message of the
/// day, player list and world metadata. Distinct from the VM attributes
/// in [`crate::model::machine`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerQueryDto {
    pub hostname: String,
    pub host_ip: String,
    pub host_port: u16,
    pub version: String,
    pub game_type: String,
    pub map: String,
    pub plugins: String,
    pub num_players: u32,
    pub max_players: u32,
    pub players: Vec<String>,
}

impl ServerQueryDto {
    /// Substitute query result shown in fallback mode or after a failed
    /// fetch.
    pub fn fallback() -> Self {
        Self {
            hostname: "A Minecraft Server".to_string(),
            host_ip: "127.0.0.1".to_string(),
            host_port: 25565,
            version: "1.21.1".to_string(),
            game_type: "SMP".to_string(),
            map: "world".to_string(),
            plugins: String::new(),
            num_players: 2,
            max_players: 20,
            players: vec!["ligmahbulls".to_string(), "Karma0o7".to_string()],
        }
    }

    /// Labelled rows for the server-query card. The player list renders
    /// separately as badges.
    pub fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Message of the day", self.hostname.clone()),
            ("Minecraft Version", self.version.clone()),
            ("Game Type", self.game_type.clone()),
            ("World Name", self.map.clone()),
            ("Server Port", self.host_port.to_string()),
            (
                "Players online",
                format!("{} / {}", self.num_players, self.max_players),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_fields_alias_raw_keys() {
        let query = ServerQueryDto::fallback();
        let fields = query.display_fields();

        assert!(fields
            .iter()
            .any(|(key, value)| *key == "Message of the day" && value == "A Minecraft Server"));
        assert!(fields
            .iter()
            .any(|(key, value)| *key == "Players online" && value == "2 / 20"));
        // Raw attribute names never leak into the display rows.
        assert!(!fields.iter().any(|(key, _)| *key == "hostname"));
    }

    #[test]
    fn parses_query_payload() {
        let payload = r#"{
            "hostname": "welcome to munecraft",
            "hostIp": "34.143.138.93",
            "hostPort": 25565,
            "version": "1.21.1",
            "gameType": "SMP",
            "map": "world",
            "plugins": "",
            "numPlayers": 1,
            "maxPlayers": 20,
            "players": ["Karma0o7"]
        }"#;

        let query: ServerQueryDto = serde_json::from_str(payload).unwrap();
        assert_eq!(query.hostname, "welcome to munecraft");
        assert_eq!(query.players, vec!["Karma0o7".to_string()]);
    }
}
