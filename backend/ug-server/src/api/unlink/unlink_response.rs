use serde::{Deserialize, Serialize};

/// Body of a successful unlink
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlinkResponse {
    pub message: String,
    pub success: bool,
}

impl UnlinkResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }
}
