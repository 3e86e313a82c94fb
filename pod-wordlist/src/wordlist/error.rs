//! Error types for loading wordlists.

use std::path::PathBuf;

/// Errors that can occur while reading a seed wordlist.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum WordlistError {
    /// The wordlist file could not be opened
    #[error("Failed to open wordlist at {path}")]
    Io {
        /// Path that was being opened
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading from the wordlist source failed, including invalid UTF-8
    #[error("Failed to read wordlist")]
    Read(#[from] std::io::Error),
}
