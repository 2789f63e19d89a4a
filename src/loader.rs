//! # Loader
//!
//! Turns load directives into script operations. A domain contributes one
//! subtree per accepted platform, a package is a single tree (optionally
//! qualified by platform), and a generic directory is just walked.
//!
//! Every tree goes through the same [`PATH_TABLE`] walk in
//! [`Loader::export_pend_paths`]: for each table entry, the accepted
//! directories are joined and combined with the previous value of every
//! variable the entry is bound to.

use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::codegen::ScriptWriter;
use crate::defaults::PROFILE_DIR;
use crate::directive::{LoadKind, PendMode};
use crate::environment::Environment;
use crate::error::{Error, Result};
use crate::path_table::{join_dirs, managed_vars, PATH_TABLE};
use crate::platform::Platforms;

/// Emits the script operations for load directives.
pub struct Loader<'a> {
    env: &'a Environment,
    platforms: &'a Platforms,
    out: &'a mut ScriptWriter,
}

impl<'a> Loader<'a> {
    pub fn new(env: &'a Environment, platforms: &'a Platforms, out: &'a mut ScriptWriter) -> Self {
        Self {
            env,
            platforms,
            out,
        }
    }

    /// The script writer, for operations outside the loader's scope.
    pub fn writer(&mut self) -> &mut ScriptWriter {
        &mut *self.out
    }

    /// Resolve a directive path against the domain base.
    ///
    /// Absolute paths and paths explicitly relative to the current directory
    /// (`./x`, `../x`) are kept; anything else is taken relative to the
    /// domain base when one is configured.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let explicit = path.starts_with('/')
            || path.starts_with("./")
            || path.starts_with("../")
            || path == "."
            || path == "..";
        match self.env.domain_base() {
            Some(base) if !explicit => Path::new(base).join(path),
            _ => PathBuf::from(path),
        }
    }

    /// Dispatch one load directive.
    pub fn load(&mut self, kind: LoadKind, mode: PendMode, path: &str) -> Result<()> {
        match kind {
            LoadKind::Domain => self.load_domain(mode, path),
            LoadKind::Package => self.load_package(mode, path),
            LoadKind::Directory => {
                self.load_directory(mode, path);
                Ok(())
            }
        }
    }

    /// Load every platform subtree of a domain, worst platform first, so the
    /// best platform's directories end up outermost.
    pub fn load_domain(&mut self, mode: PendMode, path: &str) -> Result<()> {
        let dompath = self.resolve_path(path);
        if !dompath.is_dir() {
            return Err(Error::InvalidDomain { path: dompath });
        }

        self.trace(format!("loaddomain: ({}) ({})", mode, dompath.display()));

        let platforms = self.platforms;
        for platform in platforms.worst_to_best() {
            let platpath = dompath.join(platform);
            if !platpath.is_dir() {
                continue;
            }
            self.trace(format!(
                "dompath: ({}) ({}) ({})",
                mode,
                dompath.display(),
                platform
            ));
            self.export_pend_paths(mode, &platpath);
            self.load_profiles(&platpath)?;
        }
        Ok(())
    }

    /// Load a package. A name of the form `<name>_<platform>` is replaced by
    /// the first `<name>_<p>` sibling that exists, best platform first.
    ///
    /// The profile fragment keeps the requested name: `-p foo_linux64`
    /// resolved to `foo_linux/` sources `foo_linux/etc/profile.d/foo_linux64.sh`.
    pub fn load_package(&mut self, mode: PendMode, path: &str) -> Result<()> {
        let mut pkgpath = self.resolve_path(path);

        let pkgname = file_name(&pkgpath);
        let tokens: Vec<&str> = pkgname.split('_').collect();
        if tokens.len() == 2 {
            let pkgdir = pkgpath.parent().map(Path::to_path_buf).unwrap_or_default();
            pkgpath = self
                .platforms
                .best_to_worst()
                .map(|platform| pkgdir.join(format!("{}_{}", tokens[0], platform)))
                .find(|candidate| candidate.exists())
                .ok_or(Error::PackageNotFound { path: pkgpath })?;
        }

        self.trace(format!("loadpackage: ({}) ({})", mode, pkgpath.display()));

        if pkgpath.is_dir() {
            self.export_pend_paths(mode, &pkgpath);
            let profile = pkgpath
                .join(PROFILE_DIR)
                .join(format!("{}.{}", pkgname, self.out.shell_name()));
            if profile.exists() {
                self.out.source_file(&profile);
            }
        }
        Ok(())
    }

    /// Walk an arbitrary directory tree. Nothing happens if it is missing.
    pub fn load_directory(&mut self, mode: PendMode, path: &str) {
        let dirpath = self.resolve_path(path);
        self.trace(format!("loaddirectory: ({}) ({})", mode, dirpath.display()));
        if dirpath.is_dir() {
            self.export_pend_paths(mode, &dirpath);
        }
    }

    /// Walk the path table for `base`.
    pub fn export_pend_paths(&mut self, mode: PendMode, base: &Path) {
        self.trace(format!("exportpendpaths: ({}) ({})", mode, base.display()));

        for entry in PATH_TABLE {
            let dirs = entry.accepted_dirs(base, self.env);
            if dirs.is_empty() {
                continue;
            }
            let joined = join_dirs(&dirs);
            for var in entry.vars {
                self.out
                    .export_path(var, &mode.combine(var, &joined), &joined);
            }
        }
    }

    /// Source the profile fragments of one domain platform, by file name.
    fn load_profiles(&mut self, platpath: &Path) -> Result<()> {
        self.trace(format!("loadprofiles: ({})", platpath.display()));

        let root = platpath.join(PROFILE_DIR);
        if !root.is_dir() {
            return Ok(());
        }
        let suffix = format!(".{}", self.out.shell_name());
        for entry in WalkDir::new(&root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            if entry.file_name().to_string_lossy().ends_with(&suffix) && entry.path().exists() {
                self.out.source_file(entry.path());
            }
        }
        Ok(())
    }

    /// Deduplicate every managed variable.
    pub fn dedup_paths(&mut self) {
        self.trace("deduppaths:".to_string());
        for var in managed_vars() {
            self.out.dedup_path(var);
        }
    }

    fn trace(&mut self, message: String) {
        debug!("{}", message);
        self.out.echo_err(&message);
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
