use serde::{Deserialize, Serialize};

/// Query parameters accepted by `GET /files/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// The word to look up. Absent and empty are both rejected with 400.
    #[serde(default)]
    pub keyword: String,
}

/// JSON body shared by every non-200 response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
