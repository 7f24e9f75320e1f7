use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Message shown to the user, `subject` names what was not found
    pub fn user_message(&self, subject: &str) -> String {
        match self {
            FetchError::HttpStatus(404) => {
                format!("{subject} not found. Check the name and try again.")
            }
            FetchError::HttpStatus(401) => "Invalid API key. Check your configuration.".to_string(),
            FetchError::HttpStatus(_) => "Request failed. Try again later.".to_string(),
            FetchError::Timeout => "The request took too long. Try again.".to_string(),
            FetchError::Network(_) => {
                "Could not connect. Check your connection and try again.".to_string()
            }
            FetchError::Decode(_) => "Received an unexpected response. Try again later.".to_string(),
        }
    }
}
