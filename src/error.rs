use thiserror::Error;

/// Fatal problems found while wiring the application together.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("API key must be provided via --api-key, GEMINI_API_KEY or API_KEY")]
    MissingApiKey,
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Any failure of a content generation call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("Failed to reach the generation service: {0}")]
    Request(String),
    #[error("Generation request timed out")]
    Timeout,
    #[error("Generation service returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Generation service reported an error: {0}")]
    Api(String),
    #[error("Generation service returned malformed data: {0}")]
    Malformed(String),
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs are not shown to users.
        let err = err.without_url();
        if err.is_timeout() {
            GenerationError::Timeout
        } else if err.is_decode() {
            GenerationError::Malformed(err.to_string())
        } else {
            GenerationError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::Malformed(err.to_string())
    }
}

/// Rejected user input. Never reaches the gateway.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Search query must not be empty")]
    EmptyQuery,
}

#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Preference file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No configuration directory available")]
    NoConfigDir,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("Preference error: {0}")]
    Preference(#[from] PreferenceError),
    #[error("Server error: {0}")]
    Server(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_error_displays_raw_message() {
        assert_eq!(GenerationError::Other("boom".into()).to_string(), "boom");
        assert_eq!(GenerationError::Other(String::new()).to_string(), "");
    }

    #[test]
    fn status_error_mentions_code() {
        let err = GenerationError::Status { status: 503, body: "overloaded".into() };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("overloaded"));
    }
}
