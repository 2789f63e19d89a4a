//! CLI argument parsing and dispatch

use std::io::{self, Write};

use anyhow::Result;
use clap::{CommandFactory, Parser, ValueEnum};

use ssmuse::codegen::ShellDialect;
use ssmuse::defaults::default_helper_dir;
use ssmuse::driver::{self, Invocation, Outcome};
use ssmuse::environment::Environment;

const DIRECTIVES_HELP: &str = "\
Directives:
  -d|+d <dompath>   Load domain.
  -p|+p <pkgpath>   Load package.
  -f|+f <dirpath>   Load generic/non-SSM directory tree.
  --append          Report append mode.
  --prepend         Report prepend mode.
  -v                Echo progress from this point on.
  --tmp             Write the script to a self-deleting temporary file
                    and print its path.
  -h, --help        Print help.

Use leading - (e.g., -d) to prepend new paths, leading + to append
new paths. The output must be evaluated by the calling shell, e.g.
  eval \"$(ssmuse sh -d /ssm/main)\"
  . \"$(ssmuse sh --tmp -d /ssm/main)\"";

/// Shell dialects the script can be generated for
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ShellArg {
    /// Bourne-compatible shells
    Sh,
    /// C shell and tcsh
    Csh,
}

impl From<ShellArg> for ShellDialect {
    fn from(shell: ShellArg) -> Self {
        match shell {
            ShellArg::Sh => ShellDialect::Sh,
            ShellArg::Csh => ShellDialect::Csh,
        }
    }
}

/// Load SSM domains, packages, and generic directory trees into the
/// environment of the calling shell
#[derive(Parser, Debug)]
#[command(name = "ssmuse")]
#[command(version, about, long_about = None, after_help = DIRECTIVES_HELP)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Shell dialect of the generated script
    #[arg(value_enum, value_name = "SHELL")]
    shell: ShellArg,

    /// Load directives and switches, processed left to right
    #[arg(
        value_name = "DIRECTIVE",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    directives: Vec<String>,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let env = Environment::from_process();

        let invocation = Invocation::parse(self.shell.into(), &self.directives)?;

        match driver::run(&invocation, &env, &default_helper_dir())? {
            Outcome::Help => Cli::command().print_help()?,
            Outcome::Script(script) => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(script.as_bytes())?;
                stdout.flush()?;
            }
            Outcome::TempFile(path) => println!("{}", path.display()),
        }
        Ok(())
    }
}
