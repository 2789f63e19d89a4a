//! C shell rendering.

use super::Dialect;

/// Renders `csh`/`tcsh` syntax.
///
/// `csh` has no portable way to echo to stderr, so [`Dialect::echo_err`]
/// renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Csh;

impl Dialect for Csh {
    fn name(&self) -> &'static str {
        "csh"
    }

    fn comment(&self, text: &str) -> String {
        format!("# {}\n", text)
    }

    fn echo_out(&self, text: &str) -> String {
        format!("echo \"{}\"\n", text)
    }

    fn echo_err(&self, _text: &str) -> String {
        String::new()
    }

    fn execute(&self, command: &str) -> String {
        format!("{}\n", command)
    }

    // `$?NAME` guards the unset case, where `${NAME}` is an error in csh.
    fn export_path(&self, name: &str, val: &str, fallback: &str) -> String {
        format!(
            "\nif ( $?{name} == 0 ) then\n    setenv {name} \"{fallback}\"\nelse\n    if ( \"${{{name}}}\" != \"\" ) then\n        setenv {name} \"{val}\"\n    else\n        setenv {name} \"{fallback}\"\n    endif\nendif\n"
        )
    }

    fn export_var(&self, name: &str, val: &str) -> String {
        format!("setenv {} \"{}\"\n", name, val)
    }

    fn source_file(&self, path: &str) -> String {
        format!("source \"{}\"\n", path)
    }

    fn unexport_var(&self, name: &str) -> String {
        format!("unsetenv {}\n", name)
    }

    fn dedup_path(&self, name: &str, helper: &str) -> String {
        format!(
            "\nif ( $?{name} == 1 ) then\n    setenv {name} \"`{helper} ${{{name}}}`\"\nendif\n"
        )
    }
}
