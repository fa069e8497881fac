use serde::{Deserialize, Serialize};

/// Body for the firewall add-ip operation. The passcode is checked
/// server-side; no bearer token is involved.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddIpRequest {
    pub address: String,
    pub passcode: String,
}

/// Whether the caller's IP is on the game server's firewall whitelist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WhitelistStatus {
    Present,
    Absent,
}

impl WhitelistStatus {
    /// The check endpoint answers with a bare `"PRESENT"`/`"ABSENT"`
    /// message rather than a boolean.
    pub fn from_message(message: &str) -> Self {
        if message == "PRESENT" {
            WhitelistStatus::Present
        } else {
            WhitelistStatus::Absent
        }
    }

    pub fn is_present(self) -> bool {
        self == WhitelistStatus::Present
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_message_maps_to_present() {
        assert_eq!(
            WhitelistStatus::from_message("PRESENT"),
            WhitelistStatus::Present
        );
        assert!(WhitelistStatus::from_message("PRESENT").is_present());
    }

    #[test]
    fn anything_else_maps_to_absent() {
        assert_eq!(
            WhitelistStatus::from_message("ABSENT"),
            WhitelistStatus::Absent
        );
        assert_eq!(
            WhitelistStatus::from_message("present"),
            WhitelistStatus::Absent
        );
        assert_eq!(WhitelistStatus::from_message(""), WhitelistStatus::Absent);
    }

    #[test]
    fn parsing_is_idempotent() {
        for _ in 0..3 {
            assert_eq!(
                WhitelistStatus::from_message("PRESENT"),
                WhitelistStatus::Present
            );
        }
    }
}
