//! The path table: which subdirectories of a domain platform or package
//! feed which environment variables.
//!
//! Each [`PathEntry`] binds a role (binaries, headers, libraries, ...) to one
//! or more variables. [`PathEntry::accepted_dirs`] turns an entry and a base
//! directory into the ordered list of directories to add; the loader then
//! renders one update per bound variable.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::defaults::{INCDIRS_VAR, LIBDIRS_VAR, LIBRARY_SUFFIXES};
use crate::environment::Environment;

/// Acceptance test for a candidate directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirFilter {
    /// At least one entry.
    NonEmpty,
    /// At least one file ending in a library suffix.
    HasLibraries,
}

impl DirFilter {
    /// Whether `dir` exists, is a directory and passes the filter.
    pub fn accepts(self, dir: &Path) -> bool {
        if !dir.is_dir() {
            return false;
        }
        let mut entries = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok());
        match self {
            DirFilter::NonEmpty => entries.next().is_some(),
            DirFilter::HasLibraries => entries.any(|entry| {
                let name = entry.file_name().to_string_lossy();
                LIBRARY_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
            }),
        }
    }
}

/// One row of the path table.
#[derive(Debug, Clone, Copy)]
pub struct PathEntry {
    /// Variables updated with the accepted directories.
    pub vars: &'static [&'static str],
    /// Directory auxiliary names are relative to.
    pub root: &'static str,
    /// Subpaths relative to the base, always tried first.
    pub defaults: &'static [&'static str],
    /// Variable naming extra subdirectories of `root`.
    pub aux_var: Option<&'static str>,
    pub filter: DirFilter,
}

/// Every managed role, in emission order.
pub const PATH_TABLE: &[PathEntry] = &[
    PathEntry {
        vars: &["PATH"],
        root: "bin",
        defaults: &["bin"],
        aux_var: None,
        filter: DirFilter::NonEmpty,
    },
    PathEntry {
        vars: &["CPATH", "SSM_INCLUDE_PATH"],
        root: "include",
        defaults: &["include"],
        aux_var: Some(INCDIRS_VAR),
        filter: DirFilter::NonEmpty,
    },
    PathEntry {
        vars: &["LIBPATH", "LD_LIBRARY_PATH"],
        root: "lib",
        defaults: &["lib"],
        aux_var: Some(LIBDIRS_VAR),
        filter: DirFilter::HasLibraries,
    },
    PathEntry {
        vars: &["MANPATH"],
        root: "man",
        defaults: &["man", "share/man"],
        aux_var: None,
        filter: DirFilter::NonEmpty,
    },
    PathEntry {
        vars: &["PYTHONPATH"],
        root: "lib/python",
        defaults: &["lib/python"],
        aux_var: None,
        filter: DirFilter::NonEmpty,
    },
    PathEntry {
        vars: &["TCL_LIBRARY"],
        root: "lib/tcl",
        defaults: &["lib/tcl"],
        aux_var: None,
        filter: DirFilter::NonEmpty,
    },
];

impl PathEntry {
    /// Candidate directories under `base`, before filtering.
    ///
    /// Defaults come first, then the names listed in the auxiliary variable.
    /// An auxiliary name starting with `/` is taken relative to `base`, any
    /// other name relative to `base/<root>`.
    pub fn candidates(&self, base: &Path, env: &Environment) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = self.defaults.iter().map(|sub| base.join(sub)).collect();
        if let Some(var) = self.aux_var {
            dirs.extend(env.path_list(var).iter().map(|name| {
                match name.strip_prefix('/') {
                    Some(rel) => base.join(rel),
                    None => base.join(self.root).join(name),
                }
            }));
        }
        dirs
    }

    /// Candidate directories that exist and pass the entry's filter.
    pub fn accepted_dirs(&self, base: &Path, env: &Environment) -> Vec<PathBuf> {
        self.candidates(base, env)
            .into_iter()
            .filter(|dir| self.filter.accepts(dir))
            .collect()
    }
}

/// All variables the table manages, in table order.
pub fn managed_vars() -> impl Iterator<Item = &'static str> {
    PATH_TABLE.iter().flat_map(|entry| entry.vars.iter().copied())
}

/// Join directories into a `:`-separated list.
pub fn join_dirs(dirs: &[PathBuf]) -> String {
    dirs.iter()
        .map(|dir| dir.to_string_lossy())
        .collect::<Vec<_>>()
        .join(":")
}
