use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by key pair generation.
///
/// Every variant keeps the underlying cause both as `source()` and in its
/// display text, so callers can show the message as-is.
#[derive(Error, Debug)]
pub enum KeygenError {
    /// The random source refused to produce bytes
    #[error("random source failure: {0}")]
    RandomSource(#[source] rand::Error),

    /// RSA prime search or key assembly failed
    #[error("key generation failed: {0}")]
    KeyGeneration(#[source] rsa::Error),

    /// Public key derivation or PEM/authorized-key encoding failed
    #[error("key format error: {0}")]
    KeyFormat(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Writing one of the two key files failed
    #[error("failed to write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No default location could be resolved
    #[error("could not determine the home directory")]
    HomeDirectory,
}

impl KeygenError {
    pub(crate) fn key_format<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        KeygenError::KeyFormat(Box::new(err))
    }

    /// Path of the file that failed to be written, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            KeygenError::FileWrite { path, .. } => Some(path),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, KeygenError>;
