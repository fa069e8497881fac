use serde::{Deserialize, Serialize};

/// Generic single-message body. The backend uses this shape both for
/// success payloads (login URL, firewall results, RCON output) and for
/// error bodies on non-2xx responses.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MessageDto {
    pub message: String,
}
