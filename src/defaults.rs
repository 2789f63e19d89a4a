//! Well-known names used across ssmuse.
//!
//! This module centralizes the environment variable names, helper program
//! names and filesystem locations of the SSM convention, so the loader,
//! the platform resolver and the driver agree on them.

use std::path::{Path, PathBuf};

/// Whitespace-separated platform list overriding every other source.
pub const PLATFORMS_VAR: &str = "SSMUSE_PLATFORMS";

/// System-wide platform list, read when `SSMUSE_PLATFORMS` is unset.
pub const PLATFORMS_FILE: &str = "/etc/ssm/platforms";

/// Platform discovery helper, looked up next to the executable.
pub const PLATFORMS_HELPER: &str = "__ssmuse_platforms.sh";

/// Path list deduplication helper, referenced by the generated script.
pub const CLEANPATH_HELPER: &str = "__ssmuse_cleanpath.ksh";

/// Variables holding the base of relative domain/package paths, in
/// precedence order.
pub const DOMAIN_BASE_VARS: [&str; 3] = ["SSMUSE_DOMAIN_BASE", "SSMUSE_BASE", "SSM_DOMAIN_BASE"];

/// Extra include subdirectories, `:`-separated.
pub const INCDIRS_VAR: &str = "SSMUSE_INCDIRS";

/// Extra library subdirectories, `:`-separated.
pub const LIBDIRS_VAR: &str = "SSMUSE_LIBDIRS";

/// Marker exported around domain and package directives.
pub const PENDMODE_VAR: &str = "SSMUSE_PENDMODE";

/// Log filter for the tool itself.
pub const LOG_VAR: &str = "SSMUSE_LOG";

/// Per-platform (domain) or per-package profile fragment directory.
pub const PROFILE_DIR: &str = "etc/profile.d";

/// File suffixes that mark a directory as holding libraries.
pub const LIBRARY_SUFFIXES: [&str; 2] = [".a", ".so"];

/// Returns the directory the helper programs are installed in.
///
/// This is the canonical directory of the running executable. Falls back to
/// the current directory if the executable path cannot be determined.
pub fn default_helper_dir() -> PathBuf {
    std::env::current_exe()
        .and_then(|exe| exe.canonicalize())
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
