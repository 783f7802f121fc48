pub const DEFAULT_ENDPOINT: &str = "https://chiefai-xu2mpqavca-uc.a.run.app";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;
