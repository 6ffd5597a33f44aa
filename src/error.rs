use thiserror::Error;

/// Contract violations raised by the layout engine. These all indicate
/// caller bugs; none is retryable and none is fatal to the host process.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("unknown sort mode `{0}` (expected \"popular\" or \"newest\")")]
    UnknownSortMode(String),

    #[error("node descriptor has an empty id")]
    EmptyNodeId,

    #[error("duplicate node id `{0}`")]
    DuplicateNodeId(String),

    #[error("canvas dimensions must be positive and finite, got {width}x{height}")]
    InvalidCanvas { width: f32, height: f32 },
}
