use core::fmt;
use serde::{Deserialize, Serialize};

/// Envelope for create and update outcomes: the server's human-readable
/// message plus the resulting product snapshot.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T: fmt::Debug> fmt::Display for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ApiResponse {{ message: {}, data: {:?} }}",
            self.message, self.data
        )
    }
}
