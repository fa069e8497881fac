use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,
    pub src: String,
    pub message: String,
}

/// Tail of the game-server process log.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LogsDto {
    pub items: Vec<LogEntry>,
}

impl LogsDto {
    /// Substitute log tail shown in fallback mode or after a failed fetch.
    pub fn fallback() -> Self {
        let entry = |level: &str, src: &str, message: &str| LogEntry {
            timestamp: "02Jan2026 17:15:11.405".to_string(),
            level: level.to_string(),
            src: src.to_string(),
            message: message.to_string(),
        };

        Self {
            items: vec![
                entry(
                    "INFO",
                    "net.minecraft.server.MinecraftServer/",
                    ": ligmahbulls has made the advancement [Cobweb Entanglement]",
                ),
                entry(
                    "INFO",
                    "net.minecraft.server.MinecraftServer/",
                    ": Karma0o7 fell from a high place",
                ),
                entry(
                    "WARN",
                    "gravestone/",
                    ": The death ID of player Karma0o7 is 10a665a3-f0ce-4273-8868-17f3c6f7e2e1",
                ),
                entry(
                    "ERROR",
                    "pingwheel/",
                    ": Channel update: ligmahbulls -> default",
                ),
            ],
        }
    }
}
