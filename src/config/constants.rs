use std::time::Duration;

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const SERVER_PORT_RANGE_START: u16 = 3000;
pub const SERVER_PORT_RANGE_END: u16 = 3100;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;

pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-5-nano";

/// Upload cap matching what the file picker advertises.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

// Progress estimate: ~50 KB of document text per second, clamped to 8-30s.
pub const PROGRESS_KB_PER_SECOND: f64 = 50.0;
pub const PROGRESS_MIN_ESTIMATE_SECS: f64 = 8.0;
pub const PROGRESS_MAX_ESTIMATE_SECS: f64 = 30.0;

/// Pause at 100% before the report is shown.
pub const COMPLETION_PAUSE_MS: u64 = 300;

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
