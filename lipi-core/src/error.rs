use thiserror::Error;

/// All errors produced by lipi-core.
#[derive(Debug, Error)]
pub enum TranslitError {
    /// The running platform exposes no native transliteration facility.
    /// Retrying cannot succeed without a platform upgrade.
    #[error("platform transliteration unavailable: {0}")]
    UnsupportedPlatform(String),

    /// A transliterator could not be constructed, or refused an input.
    /// Carries the underlying native message.
    #[error("transform error: {0}")]
    Transform(String),

    /// The request payload did not match the expected shape.
    #[error("invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),

    /// The call named a method this handler does not implement.
    #[error("unknown method `{0}`")]
    UnknownMethod(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TranslitError {
    /// Machine-readable code placed in the wire error envelope.
    ///
    /// `UnknownMethod` never reaches an envelope — the handler answers with
    /// `MethodResult::NotImplemented` instead of an error.
    pub fn code(&self) -> &'static str {
        match self {
            TranslitError::UnsupportedPlatform(_) => "API_TOO_LOW",
            _ => "TRANSLIT_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, TranslitError>;
