use crate::handle::ScopeId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("no scope is bound to dispatch key {0:#x}")]
    UnknownDispatchKey(u64),

    #[error("scope {0} is not an instance scope")]
    NotAnInstanceScope(ScopeId),

    #[error("configuration error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
