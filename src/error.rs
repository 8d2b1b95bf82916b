use miette::Diagnostic;
use thiserror::Error;

/// Main error type for asset generation.
#[derive(Error, Diagnostic, Debug)]
pub enum ArtError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(rama::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to encode {path}: {message}")]
    #[diagnostic(code(rama::encode))]
    Encode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Unknown identity: {name}")]
    #[diagnostic(
        code(rama::unknown_identity),
        help("Known identities: rama, sita, hanuman, demon, background")
    )]
    UnknownIdentity { name: String },

    #[error("Config error: {message}")]
    #[diagnostic(code(rama::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(rama::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl ArtError {
    /// Wrap an IO error with the path it concerns.
    pub fn io(path: impl Into<std::path::PathBuf>, context: &str, err: std::io::Error) -> Self {
        ArtError::Io {
            path: path.into(),
            message: format!("{}: {}", context, err),
        }
    }
}

pub type Result<T> = std::result::Result<T, ArtError>;
