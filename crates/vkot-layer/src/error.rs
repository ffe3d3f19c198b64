use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayerError {
    #[error("{0} belongs to a platform extension not available in this build")]
    UnsupportedEntryPoint(&'static str),

    #[error("unknown entry point: {0}")]
    UnknownEntryPoint(String),

    #[error(transparent)]
    Core(#[from] vkot_core::CoreError),
}
