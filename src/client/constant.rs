pub const SITE_NAME: &str = "Craftboard";

/// Advisory delay before the "API server might be starting up" card shows,
/// measured from dashboard mount until VM details and mod list both settle.
pub const SLOW_BOOT_DELAY_MS: u32 = 4_500;
