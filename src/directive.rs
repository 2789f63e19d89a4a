//! Parsing of the directive list that follows the shell argument.
//!
//! Load directives take a path argument; a leading `-` prepends the new
//! paths, a leading `+` appends them:
//!
//! | flag | directive |
//! |---|---|
//! | `-d` / `+d` | load a domain |
//! | `-p` / `+p` | load a package |
//! | `-f` / `+f` | load a generic directory tree |
//!
//! Switches (`--append`, `--prepend`, `-v`, `--tmp`, `-h`/`--help`) may
//! appear anywhere and keep their position in the list, since their effect
//! applies from that point on.

use std::fmt;

use crate::error::{Error, Result};

/// Where new directories go relative to a variable's existing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendMode {
    Prepend,
    Append,
}

impl PendMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PendMode::Prepend => "prepend",
            PendMode::Append => "append",
        }
    }

    /// Combine new directories with the shell reference to `name`.
    ///
    /// `Prepend` yields `new:${name}`, `Append` yields `${name}:new`.
    pub fn combine(self, name: &str, new: &str) -> String {
        match self {
            PendMode::Prepend => format!("{}:${{{}}}", new, name),
            PendMode::Append => format!("${{{}}}:{}", name, new),
        }
    }
}

impl fmt::Display for PendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a load directive points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    Domain,
    Package,
    Directory,
}

/// One element of the directive list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Load {
        kind: LoadKind,
        mode: PendMode,
        path: String,
    },
    /// `--append` / `--prepend`.
    PendMode(PendMode),
    /// `-v`: echo progress from here on.
    Verbose,
    /// `--tmp`: write to a self-deleting temporary file.
    TempFile,
    /// `-h` / `--help`.
    Help,
}

fn load_flag(arg: &str) -> Option<(LoadKind, PendMode)> {
    let mode = match arg.as_bytes().first() {
        Some(b'-') => PendMode::Prepend,
        Some(b'+') => PendMode::Append,
        _ => return None,
    };
    let kind = match &arg[1..] {
        "d" => LoadKind::Domain,
        "p" => LoadKind::Package,
        "f" => LoadKind::Directory,
        _ => return None,
    };
    Some((kind, mode))
}

/// Parse the arguments following the shell dialect, strictly left to right.
pub fn parse_directives<I, S>(args: I) -> Result<Vec<Directive>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();
    let mut directives = Vec::new();

    while let Some(arg) = args.next() {
        let arg = arg.as_ref();
        let directive = if let Some((kind, mode)) = load_flag(arg) {
            let path = args.next().ok_or_else(|| Error::MissingPath {
                flag: arg.to_string(),
            })?;
            Directive::Load {
                kind,
                mode,
                path: path.as_ref().to_string(),
            }
        } else {
            match arg {
                "--append" => Directive::PendMode(PendMode::Append),
                "--prepend" => Directive::PendMode(PendMode::Prepend),
                "-v" => Directive::Verbose,
                "--tmp" => Directive::TempFile,
                "-h" | "--help" => Directive::Help,
                _ => {
                    return Err(Error::UnknownArgument {
                        arg: arg.to_string(),
                    })
                }
            }
        };
        directives.push(directive);
    }

    Ok(directives)
}
