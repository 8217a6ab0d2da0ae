#[derive(Debug, Clone, thiserror::Error)]
pub enum CanError {
    #[error("bad interface {0}")]
    BadInterface(String),
    #[error("socket operation failed: {0}")]
    OperationError(String),
}
