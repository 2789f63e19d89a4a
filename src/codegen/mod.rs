//! # Shell Code Generation
//!
//! The generated script is written for one of two shell dialects. Each
//! dialect implements [`Dialect`], a set of pure rendering functions; the
//! [`ScriptWriter`] drives a dialect, applies verbosity, and collects the
//! rendered text into a [`ScriptBuffer`].
//!
//! Both renderings guarantee the same semantics:
//!
//! - `export_path` sets a variable to `val` when it already holds a
//!   non-empty value, otherwise to `fallback`. Evaluating the script in a
//!   shell where none of the variables are set is therefore idempotent, and
//!   existing content is preserved otherwise.
//! - `dedup_path` pipes a variable through the cleanpath helper, but only
//!   when the variable is set.

pub mod csh;
pub mod sh;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::defaults::CLEANPATH_HELPER;
use crate::script::ScriptBuffer;

pub use csh::Csh;
pub use sh::Sh;

/// Rendering of script operations in one shell syntax.
pub trait Dialect {
    /// Dialect name, also the suffix of profile fragments it can source.
    fn name(&self) -> &'static str;
    fn comment(&self, text: &str) -> String;
    /// Echo to standard output.
    fn echo_out(&self, text: &str) -> String;
    /// Echo to standard error.
    fn echo_err(&self, text: &str) -> String;
    /// Emit a raw command line.
    fn execute(&self, command: &str) -> String;
    /// Export `name` as `val` if it is non-empty, else as `fallback`.
    fn export_path(&self, name: &str, val: &str, fallback: &str) -> String;
    fn export_var(&self, name: &str, val: &str) -> String;
    fn source_file(&self, path: &str) -> String;
    fn unexport_var(&self, name: &str) -> String;
    /// Reassign `name` to the output of `helper` run on its value.
    fn dedup_path(&self, name: &str, helper: &str) -> String;
}

/// Supported shell dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellDialect {
    Sh,
    Csh,
}

impl ShellDialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShellDialect::Sh => "sh",
            ShellDialect::Csh => "csh",
        }
    }

    /// The renderer for this dialect.
    pub fn renderer(self) -> Box<dyn Dialect> {
        match self {
            ShellDialect::Sh => Box::new(Sh),
            ShellDialect::Csh => Box::new(Csh),
        }
    }
}

impl fmt::Display for ShellDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Buffers script text rendered by a [`Dialect`].
pub struct ScriptWriter {
    dialect: Box<dyn Dialect>,
    buffer: ScriptBuffer,
    verbose: bool,
    cleanpath: PathBuf,
}

impl ScriptWriter {
    /// Create a writer whose dedup blocks call the cleanpath helper found in
    /// `helper_dir`.
    pub fn new(dialect: ShellDialect, helper_dir: &Path) -> Self {
        Self {
            dialect: dialect.renderer(),
            buffer: ScriptBuffer::new(),
            verbose: false,
            cleanpath: helper_dir.join(CLEANPATH_HELPER),
        }
    }

    /// Suffix of profile fragments this script can source.
    pub fn shell_name(&self) -> &'static str {
        self.dialect.name()
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn comment(&mut self, text: &str) {
        self.buffer.push(self.dialect.comment(text));
    }

    /// Echo to stdout, only when verbose.
    pub fn echo_out(&mut self, text: &str) {
        if self.verbose {
            self.buffer.push(self.dialect.echo_out(text));
        }
    }

    /// Echo to stderr, only when verbose.
    pub fn echo_err(&mut self, text: &str) {
        if self.verbose {
            self.buffer.push(self.dialect.echo_err(text));
        }
    }

    pub fn execute(&mut self, command: &str) {
        self.buffer.push(self.dialect.execute(command));
    }

    pub fn export_path(&mut self, name: &str, val: &str, fallback: &str) {
        self.buffer
            .push(self.dialect.export_path(name, val, fallback));
    }

    pub fn export_var(&mut self, name: &str, val: &str) {
        self.buffer.push(self.dialect.export_var(name, val));
    }

    pub fn source_file(&mut self, path: &Path) {
        self.buffer
            .push(self.dialect.source_file(&path.to_string_lossy()));
    }

    pub fn unexport_var(&mut self, name: &str) {
        self.buffer.push(self.dialect.unexport_var(name));
    }

    pub fn dedup_path(&mut self, name: &str) {
        let helper = self.cleanpath.to_string_lossy().into_owned();
        self.buffer.push(self.dialect.dedup_path(name, &helper));
    }

    pub fn buffer(&self) -> &ScriptBuffer {
        &self.buffer
    }

    pub fn into_buffer(self) -> ScriptBuffer {
        self.buffer
    }
}
