/// Possible errors

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Route planning hit input it cannot order, such as a non-finite coordinate
    #[error("route computation failed: {0}")]
    RouteComputation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to render route: {0}")]
    Render(String),
}

pub type Result<T> = core::result::Result<T, Error>;
