//! # ssmuse Library
//!
//! This library computes the environment changes needed to use software
//! installed following the SSM convention, and renders them as a script for
//! the `sh` or `csh` family of shells. It backs the `ssmuse` command-line
//! tool, whose output is meant to be evaluated by the calling shell.
//!
//! ## Quick Example
//!
//! ```
//! use std::path::Path;
//! use ssmuse::codegen::{ScriptWriter, ShellDialect};
//! use ssmuse::directive::PendMode;
//! use ssmuse::environment::Environment;
//! use ssmuse::loader::Loader;
//! use ssmuse::platform::Platforms;
//!
//! let env = Environment::default();
//! let platforms = Platforms::parse("linux26-x86-64 all");
//! let mut out = ScriptWriter::new(ShellDialect::Sh, Path::new("/opt/ssmuse/bin"));
//!
//! let mut loader = Loader::new(&env, &platforms, &mut out);
//! loader.load_directory(PendMode::Prepend, "/does/not/exist");
//! loader.dedup_paths();
//!
//! assert!(out.buffer().render().contains("__ssmuse_cleanpath.ksh ${PATH}"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Platforms (`platform`)**: the ordered list of platform identifiers
//!   the host accepts, most-preferred first.
//! - **Path table (`path_table`)**: which subdirectories (`bin`, `include`,
//!   `lib`, `man`, ...) feed which variables (`PATH`, `CPATH`,
//!   `LD_LIBRARY_PATH`, `MANPATH`, ...).
//! - **Code generation (`codegen`, `script`)**: a `Dialect` per shell family
//!   renders operations into a buffered script.
//! - **Loading (`loader`)**: domains, packages and plain directories are
//!   walked against the path table.
//! - **Driver (`driver`)**: runs the directives of one command line and
//!   produces the final script.
//!
//! ## Execution Flow
//!
//! 1. **Platforms**: resolve the platform list.
//! 2. **Banner**: host, date and platforms as comments.
//! 3. **Directives**: each load directive, in command-line order.
//! 4. **Deduplication**: one cleanup block per managed variable.
//! 5. **Output**: the script itself, or the path of a self-deleting file.

pub mod codegen;
pub mod defaults;
pub mod directive;
pub mod driver;
pub mod environment;
pub mod error;
pub mod loader;
pub mod path_table;
pub mod platform;
pub mod script;

#[cfg(test)]
mod environment_proptest;
