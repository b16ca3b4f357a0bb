use thiserror::Error;
use tonic::{Code, Status};

/// Failure of a single gRPC call as seen by the client.
///
/// `Grpc` keeps the status code and message exactly as the server (or the
/// transport) produced them; interpreting a particular code is left to the
/// caller. `MissingData` covers calls that completed but returned an
/// envelope without its payload message.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("{message}")]
    Grpc { code: Code, message: String },

    #[error("{0}")]
    MissingData(&'static str),
}

impl RpcError {
    pub fn code(&self) -> Option<Code> {
        match self {
            RpcError::Grpc { code, .. } => Some(*code),
            RpcError::MissingData(_) => None,
        }
    }
}

impl From<Status> for RpcError {
    fn from(status: Status) -> Self {
        RpcError::Grpc {
            code: status.code(),
            message: status.message().to_string(),
        }
    }
}
