//! Response bodies that are not entities.

use serde::{Deserialize, Serialize};

/// `{ "message": ... }` - the body of every error and of delete confirmations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
