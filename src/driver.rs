//! # Driver
//!
//! Runs one invocation end to end: resolve the platform list, write the
//! banner, execute the directives in command-line order, deduplicate every
//! managed variable and hand back the finished script.
//!
//! With `--tmp` the script goes to a fresh `ssmuse*` file in the temporary
//! directory instead. Its first command removes the file itself, so the
//! caller can evaluate it once and forget about it. The removal preamble is
//! rendered last and hoisted to the front of the buffer right before the
//! file is written.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use tempfile::NamedTempFile;

use crate::codegen::{ScriptWriter, ShellDialect};
use crate::defaults::PENDMODE_VAR;
use crate::directive::{parse_directives, Directive, LoadKind};
use crate::environment::Environment;
use crate::error::{Error, Result};
use crate::loader::Loader;
use crate::platform::Platforms;

/// Segments making up the temp file's self-removal preamble.
const PREAMBLE_SEGMENTS: usize = 3;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub dialect: ShellDialect,
    pub directives: Vec<Directive>,
    /// Write to a self-deleting temporary file.
    pub temp_file: bool,
}

impl Invocation {
    /// Parse the directive list following the dialect.
    pub fn parse<I, S>(dialect: ShellDialect, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let directives = parse_directives(args)?;
        let temp_file = directives.contains(&Directive::TempFile);
        Ok(Self {
            dialect,
            directives,
            temp_file,
        })
    }

    pub fn wants_help(&self) -> bool {
        self.directives.contains(&Directive::Help)
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Help was requested; nothing was generated.
    Help,
    /// The script, to be printed as is.
    Script(String),
    /// Path of the self-deleting script file.
    TempFile(PathBuf),
}

/// Execute an invocation.
///
/// `helper_dir` holds the platform discovery and cleanpath helpers.
pub fn run(invocation: &Invocation, env: &Environment, helper_dir: &Path) -> Result<Outcome> {
    if invocation.wants_help() {
        return Ok(Outcome::Help);
    }

    let temp_file = if invocation.temp_file {
        Some(create_temp_file()?)
    } else {
        None
    };

    debug!(
        "{} script for {} directive(s)",
        invocation.dialect,
        invocation.directives.len()
    );
    let platforms = Platforms::resolve(env, helper_dir);
    let mut out = ScriptWriter::new(invocation.dialect, helper_dir);
    generate(invocation, env, &platforms, &mut out)?;

    match temp_file {
        Some(file) => write_temp_file(file, out).map(Outcome::TempFile),
        None => Ok(Outcome::Script(out.into_buffer().render())),
    }
}

/// Render the banner, directives and dedup blocks into `out`.
pub fn generate(
    invocation: &Invocation,
    env: &Environment,
    platforms: &Platforms,
    out: &mut ScriptWriter,
) -> Result<()> {
    let hostname = whoami::fallible::hostname().map_err(|e| Error::Hostname {
        message: e.to_string(),
    })?;
    out.comment(&format!("host ({})", hostname));
    out.comment(&format!(
        "date ({})",
        chrono::Local::now().format("%a %b %e %H:%M:%S %Y")
    ));
    out.comment(&format!("platforms ({})", platforms.joined()));

    let mut loader = Loader::new(env, platforms, out);
    for directive in &invocation.directives {
        match directive {
            Directive::Load { kind, mode, path } => {
                info!("{:?} {} ({})", kind, path, mode);
                match kind {
                    LoadKind::Domain | LoadKind::Package => {
                        loader.writer().export_var(PENDMODE_VAR, mode.as_str())
                    }
                    LoadKind::Directory => loader.writer().unexport_var(PENDMODE_VAR),
                }
                loader.load(*kind, *mode, path)?;
            }
            Directive::PendMode(mode) => {
                debug!("pendmode: {}", mode);
                loader.writer().echo_err(&format!("pendmode: {}", mode));
            }
            Directive::Verbose => loader.writer().set_verbose(true),
            Directive::TempFile | Directive::Help => {}
        }
    }

    loader.writer().unexport_var(PENDMODE_VAR);
    loader.dedup_paths();
    Ok(())
}

fn create_temp_file() -> Result<NamedTempFile> {
    tempfile::Builder::new()
        .prefix("ssmuse")
        .tempfile()
        .map_err(|e| Error::TempFile {
            message: e.to_string(),
        })
}

fn write_temp_file(mut file: NamedTempFile, mut out: ScriptWriter) -> Result<PathBuf> {
    let path = file.path().to_path_buf();
    out.comment("remove self/temp file");
    out.execute(&format!("/bin/rm -f {}", path.display()));
    out.comment("");

    let mut buffer = out.into_buffer();
    buffer.hoist_tail(PREAMBLE_SEGMENTS);

    file.write_all(buffer.render().as_bytes())
        .map_err(|e| Error::TempFile {
            message: e.to_string(),
        })?;
    file.keep().map_err(|e| Error::TempFile {
        message: e.to_string(),
    })?;
    debug!("script written to {}", path.display());
    Ok(path)
}
