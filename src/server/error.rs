#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Http server failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Lambda runtime failed: {0}")]
    Lambda(lambda_runtime::Error),
}
