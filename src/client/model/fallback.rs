/// Session-wide substitution of live data with fixed sample data, decided
/// by a single health probe at boot. Frozen for the lifetime of the loaded
/// page; it never flips mid-session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FallbackMode(bool);

impl FallbackMode {
    pub fn from_probe(healthy: bool) -> Self {
        FallbackMode(!healthy)
    }

    pub fn live() -> Self {
        FallbackMode(false)
    }

    pub fn active(self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unhealthy_probe_activates_fallback() {
        assert!(FallbackMode::from_probe(false).active());
        assert!(!FallbackMode::from_probe(true).active());
        assert!(!FallbackMode::live().active());
    }
}
