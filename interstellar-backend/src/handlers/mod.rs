pub mod responses;
pub mod statuses;
pub mod view_models;

use serde::Deserialize;

/// Optional `?message=` accepted by the response endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct MessageQuery {
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageQuery {
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}
