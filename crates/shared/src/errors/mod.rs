mod form;
mod grpc;

pub use self::form::FormError;
pub use self::grpc::RpcError;
