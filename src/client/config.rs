use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("CRAFTBOARD_API_BASE is not set; the dashboard cannot derive its API endpoints")]
    MissingBaseUrl,
}

/// Static registry mapping every backend operation to its URL, all derived
/// from one base URL by fixed path suffixes. Built once at startup, never
/// mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Read the base URL baked in at build time. An unset or empty value is
    /// a fatal configuration error, reported before any UI renders.
    pub fn from_env() -> Result<Self, ConfigError> {
        match option_env!("CRAFTBOARD_API_BASE") {
            Some(base) if !base.trim().is_empty() => Ok(Self::new(base)),
            _ => Err(ConfigError::MissingBaseUrl),
        }
    }

    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn api(&self, suffix: &str) -> String {
        format!("{}/api/v2/{}", self.base, suffix)
    }

    pub fn health(&self) -> String {
        self.api("ping")
    }

    pub fn machine(&self) -> String {
        self.api("machine")
    }

    pub fn server_query(&self, address: &str) -> String {
        with_params(self.api("server-info"), &[("address", address)])
    }

    pub fn mod_list(&self) -> String {
        self.api("mods")
    }

    pub fn mod_download(&self, file: &str) -> String {
        with_params(self.api("mods/download"), &[("file", file)])
    }

    pub fn logs(&self, address: &str, lines: u32) -> String {
        with_params(
            self.api("logs"),
            &[("address", address), ("c", &lines.to_string())],
        )
    }

    pub fn firewall_add_ip(&self) -> String {
        self.api("firewall/add-ip")
    }

    pub fn firewall_check_ip(&self, ip: &str) -> String {
        with_params(self.api("firewall/check-ip"), &[("ip", ip)])
    }

    pub fn firewall_purge(&self) -> String {
        self.api("firewall/purge")
    }

    pub fn firewall_make_public(&self) -> String {
        self.api("firewall/make-public")
    }

    pub fn login(&self) -> String {
        self.api("login")
    }

    pub fn login_callback(&self, code: &str) -> String {
        with_params(self.api("callback"), &[("code", code)])
    }

    pub fn command_exec(&self, address: &str) -> String {
        with_params(self.api("rcon"), &[("address", address)])
    }
}

fn with_params(url: String, params: &[(&str, &str)]) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish();
    format!("{url}?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_operation_urls_from_base() {
        let endpoints = Endpoints::new("https://api.example.com");
        assert_eq!(endpoints.health(), "https://api.example.com/api/v2/ping");
        assert_eq!(endpoints.machine(), "https://api.example.com/api/v2/machine");
        assert_eq!(endpoints.login(), "https://api.example.com/api/v2/login");
        assert_eq!(
            endpoints.firewall_purge(),
            "https://api.example.com/api/v2/firewall/purge"
        );
    }

    #[test]
    fn trims_trailing_slash() {
        let endpoints = Endpoints::new("https://api.example.com/");
        assert_eq!(endpoints.health(), "https://api.example.com/api/v2/ping");
    }

    #[test]
    fn encodes_query_parameters() {
        let endpoints = Endpoints::new("https://api.example.com");
        assert_eq!(
            endpoints.server_query("34.143.138.93"),
            "https://api.example.com/api/v2/server-info?address=34.143.138.93"
        );
        assert_eq!(
            endpoints.mod_download("some mod+v2.jar"),
            "https://api.example.com/api/v2/mods/download?file=some+mod%2Bv2.jar"
        );
    }

    #[test]
    fn missing_base_url_error_names_the_variable() {
        let message = ConfigError::MissingBaseUrl.to_string();
        assert!(message.contains("CRAFTBOARD_API_BASE"));
    }

    #[test]
    fn logs_url_carries_address_and_line_count() {
        let endpoints = Endpoints::new("https://api.example.com");
        assert_eq!(
            endpoints.logs("34.143.138.93", 200),
            "https://api.example.com/api/v2/logs?address=34.143.138.93&c=200"
        );
    }
}
