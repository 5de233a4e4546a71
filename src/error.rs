//! Application error type and exit-code conventions.
//!
//! Exit codes:
//! - `2`: invalid configuration, usage, or export I/O
//! - `3`: one or both fetches failed
//! - `4`: a fetch returned no payload

pub const EXIT_CONFIG: u8 = 2;
pub const EXIT_FETCH: u8 = 3;
pub const EXIT_PROCESSING: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(EXIT_CONFIG, message)
    }

    /// Both fetch outcomes are reported, even when only one failed.
    pub fn fetch_failed(workers: &str, certifications: &str) -> Self {
        Self::new(
            EXIT_FETCH,
            format!("Failed to fetch data. workers: {workers}; certifications: {certifications}"),
        )
    }

    pub fn missing_payload(what: &str) -> Self {
        Self::new(EXIT_PROCESSING, format!("No {what} data received."))
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
