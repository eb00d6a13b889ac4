// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ReadabilityError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ReadabilityError>,
    },

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, ReadabilityError>;

/// Coarse classification used by callers deciding how to report a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Arithmetic,
    NumericDomain,
    AverageUndefined,
    Other,
}

impl ReadabilityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Context { source, .. } => source.kind(),
            Self::Input(_) => ErrorKind::Input,
            Self::Domain(DomainError::ZeroDenominator { .. }) => ErrorKind::Arithmetic,
            Self::Domain(DomainError::NumericDomain { .. }) => ErrorKind::NumericDomain,
            Self::Domain(DomainError::AverageUndefined) => ErrorKind::AverageUndefined,
            Self::Infrastructure(InfrastructureError::FileRead { .. }) => ErrorKind::Input,
            Self::Infrastructure(_) => ErrorKind::Other,
        }
    }
}

/// Problems with the document handed to the tool.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("File not found: '{path}'")]
    FileNotFound { path: PathBuf },

    #[error("Wrong file type: '{path}' (expected a .txt file)")]
    WrongFileType { path: PathBuf },

    #[error("Text is empty")]
    EmptyText,
}

/// Domain-layer specific errors.
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("{formula} cannot be computed: {count} count is zero")]
    ZeroDenominator { formula: &'static str, count: &'static str },

    #[error("{formula} cannot be computed: square root of negative value {radicand}")]
    NumericDomain { formula: &'static str, radicand: f64 },

    #[error("Average age is undefined: no score selected")]
    AverageUndefined,
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read score selection: {source}")]
    Prompt {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for ReadabilityError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ReadabilityError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for ReadabilityError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<ReadabilityError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ReadabilityError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ReadabilityError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
