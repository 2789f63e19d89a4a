//! # Error Handling
//!
//! This module defines the centralized error type for `ssmuse`. It uses the
//! `thiserror` library to build a single `Error` enum covering every failure
//! the tool can run into while turning load directives into a shell script.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. Variants fall into four groups:
//!   - usage errors (unknown argument, directive without its path),
//!   - resolution errors (invalid domain, package not found on any platform),
//!   - infrastructure errors (temporary file could not be created),
//!   - everything else (directory walking, hostname lookup).
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! The first three groups are *fatal* conditions the user can act on and are
//! reported as `fatal: ...`. The last group is reported as an unrecoverable
//! abort. See [`Error::is_fatal`].
//!
//! Missing, empty or library-free directories are never errors: the path
//! table simply skips them.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for ssmuse operations
#[derive(Error, Debug)]
pub enum Error {
    /// A token on the command line is not a recognized directive or switch.
    #[error("unknown argument ({arg})")]
    UnknownArgument { arg: String },

    /// A load directive (`-d`, `+p`, ...) was the last token on the line.
    #[error("missing path for directive ({flag})")]
    MissingPath { flag: String },

    /// The resolved domain path is not a directory.
    #[error("loaddomain: invalid domain ({})", path.display())]
    InvalidDomain { path: PathBuf },

    /// No platform-qualified sibling of a package exists.
    #[error("loadpackage: cannot find package ({})", path.display())]
    PackageNotFound { path: PathBuf },

    /// The self-deleting output file could not be created or written.
    #[error("could not create tmp file: {message}")]
    TempFile { message: String },

    /// The local hostname could not be determined for the script banner.
    #[error("hostname lookup failed: {message}")]
    Hostname { message: String },

    /// A directory listing error, wrapped from `walkdir::Error`.
    #[error("directory listing error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

impl Error {
    /// Whether this is a condition the user caused and can fix.
    ///
    /// Fatal errors are reported verbatim; anything else is treated as an
    /// unexpected failure.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::UnknownArgument { .. }
                | Error::MissingPath { .. }
                | Error::InvalidDomain { .. }
                | Error::PackageNotFound { .. }
                | Error::TempFile { .. }
        )
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
