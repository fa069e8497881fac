use serde::{Deserialize, Serialize};

/// Public IP value the backend reports while the instance has no address
/// assigned. The server-query fetch must never fire against it.
pub const PLACEHOLDER_ADDRESS: &str = "N.A";

/// Attributes of the virtual machine hosting the game server.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VmDetailsDto {
    pub instance_name: String,
    pub instance_zone: String,
    pub machine_type: String,
    pub instance_id: String,
    pub status: String,
    pub creation_timestamp: String,
    pub public_ip: String,
    pub cpu_platform: String,
    pub cpu_cores: u32,
    pub memory_mb: u64,
    pub disk_gb: u64,
}

impl VmDetailsDto {
    /// Substitute instance shown in fallback mode or after a failed fetch.
    pub fn fallback() -> Self {
        Self {
            instance_name: "munecraft".to_string(),
            instance_zone: "us-west1-b".to_string(),
            machine_type: "c2d-standard-4".to_string(),
            instance_id: "2146535245022333325".to_string(),
            status: "RUNNING".to_string(),
            creation_timestamp: "2025-03-02T02:48:07.767-08:00".to_string(),
            public_ip: "34.143.138.93".to_string(),
            cpu_platform: "AMD Milan".to_string(),
            cpu_cores: 4,
            memory_mb: 16384,
            disk_gb: 550,
        }
    }

    /// Whether the reported public IP is a real, queryable address.
    pub fn has_public_address(&self) -> bool {
        !self.public_ip.is_empty() && self.public_ip != PLACEHOLDER_ADDRESS
    }

    pub fn is_running(&self) -> bool {
        self.status == "RUNNING"
    }

    /// Labelled rows for the instance-details card, raw attribute names
    /// renamed to their display aliases.
    pub fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Instance ID", self.instance_id.clone()),
            ("Instance Name", self.instance_name.clone()),
            ("Instance Type", self.machine_type.clone()),
            ("Availability Zone", self.instance_zone.clone()),
            ("Status", self.status.clone()),
            ("Public IP", self.public_ip.clone()),
            ("Launch Time", format_launch_time(&self.creation_timestamp)),
            ("Platform", self.cpu_platform.clone()),
            ("vCPU", format!("{} cores", self.cpu_cores)),
            ("Memory", format!("{} GB", self.memory_mb / 1024)),
            ("Total Disk Size", format!("{} GB", self.disk_gb)),
        ]
    }
}

fn format_launch_time(timestamp: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M:%S %:z").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_address_is_not_queryable() {
        let details = VmDetailsDto {
            public_ip: PLACEHOLDER_ADDRESS.to_string(),
            ..VmDetailsDto::fallback()
        };
        assert!(!details.has_public_address());
    }

    #[test]
    fn real_address_is_queryable() {
        assert!(VmDetailsDto::fallback().has_public_address());
    }

    #[test]
    fn empty_address_is_not_queryable() {
        let details = VmDetailsDto {
            public_ip: String::new(),
            ..VmDetailsDto::fallback()
        };
        assert!(!details.has_public_address());
    }

    #[test]
    fn display_fields_alias_and_derive_values() {
        let details = VmDetailsDto::fallback();
        let fields = details.display_fields();

        let lookup = |label: &str| {
            fields
                .iter()
                .find(|(key, _)| *key == label)
                .map(|(_, value)| value.clone())
                .unwrap_or_default()
        };

        assert_eq!(lookup("Instance Name"), "munecraft");
        assert_eq!(lookup("Instance Type"), "c2d-standard-4");
        assert_eq!(lookup("vCPU"), "4 cores");
        // Memory is reported in MB and displayed in GB.
        assert_eq!(lookup("Memory"), "16 GB");
        // RFC 3339 timestamps are reformatted, offset preserved.
        assert_eq!(lookup("Launch Time"), "2025-03-02 02:48:07 -08:00");
    }

    #[test]
    fn parses_camel_case_payload() {
        let payload = r#"{
            "instanceName": "munecraft",
            "instanceZone": "us-west1-b",
            "machineType": "c2d-standard-4",
            "instanceId": "2146535245022333325",
            "status": "RUNNING",
            "creationTimestamp": "2025-03-02T02:48:07.767-08:00",
            "publicIp": "34.143.138.93",
            "cpuPlatform": "AMD Milan",
            "cpuCores": 4,
            "memoryMb": 16384,
            "diskGb": 550
        }"#;

        let details: VmDetailsDto = serde_json::from_str(payload).unwrap();
        assert_eq!(details.public_ip, "34.143.138.93");
        assert!(details.is_running());
    }
}
