//! Shared test utilities for the CLI end-to-end tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_file("pkg/bin/tool", "");
//!     fixture.command().args(["sh", "-p"]).arg(fixture.path_of("pkg"));
//! }
//! ```

use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::TestFixture;
    #[allow(unused_imports)]
    pub use super::MANAGED_VARS;
}

/// Variables the tool deduplicates at the end of every script.
#[allow(dead_code)]
pub const MANAGED_VARS: [&str; 8] = [
    "PATH",
    "CPATH",
    "SSM_INCLUDE_PATH",
    "LIBPATH",
    "LD_LIBRARY_PATH",
    "MANPATH",
    "PYTHONPATH",
    "TCL_LIBRARY",
];

/// Environment variables that would leak the host's SSM setup into a test.
const SSMUSE_VARS: [&str; 7] = [
    "SSMUSE_DOMAIN_BASE",
    "SSMUSE_BASE",
    "SSM_DOMAIN_BASE",
    "SSMUSE_INCDIRS",
    "SSMUSE_LIBDIRS",
    "SSMUSE_PLATFORMS",
    "SSMUSE_LOG",
];

/// A temporary directory to lay out domains and packages in.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_file("dom/linux/bin/tool", "")
///     .with_file("dom/linux/etc/profile.d/dom.sh", "");
///
/// fixture
///     .command()
///     .args(["sh", "-d"])
///     .arg(fixture.path_of("dom"))
///     .assert()
///     .success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
    platforms: String,
}

impl TestFixture {
    /// Create a new fixture with an empty directory and the platform list
    /// `linux all`.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
            platforms: "linux all".to_string(),
        }
    }

    /// Use a different `SSMUSE_PLATFORMS` value, most-preferred first.
    #[allow(dead_code)]
    pub fn with_platforms(mut self, platforms: &str) -> Self {
        self.platforms = platforms.to_string();
        self
    }

    /// Add a file with the given path and content, creating parents.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        use assert_fs::prelude::*;
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add an empty directory.
    #[allow(dead_code)]
    pub fn with_dir(self, path: &str) -> Self {
        use assert_fs::prelude::*;
        self.temp_dir
            .child(path)
            .create_dir_all()
            .expect("Failed to create directory");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of an entry of the fixture.
    pub fn path_of(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    /// Absolute path of an entry, as a string for predicates.
    #[allow(dead_code)]
    pub fn display(&self, relative: &str) -> String {
        self.path_of(relative).display().to_string()
    }

    /// Create a command for the ssmuse binary with a controlled environment.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ssmuse");
        for var in SSMUSE_VARS {
            cmd.env_remove(var);
        }
        cmd.env("SSMUSE_PLATFORMS", &self.platforms);
        cmd.current_dir(self.path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a command expected to succeed and return its stdout.
#[allow(dead_code)]
pub fn stdout_of(cmd: &mut assert_cmd::Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("script is valid UTF-8")
}
