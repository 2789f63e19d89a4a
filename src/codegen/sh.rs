//! Bourne shell rendering.

use super::Dialect;

/// Renders POSIX `sh` syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sh;

impl Dialect for Sh {
    fn name(&self) -> &'static str {
        "sh"
    }

    fn comment(&self, text: &str) -> String {
        format!("# {}\n", text)
    }

    fn echo_out(&self, text: &str) -> String {
        format!("echo \"{}\"\n", text)
    }

    fn echo_err(&self, text: &str) -> String {
        format!("echo \"{}\" 1>&2\n", text)
    }

    fn execute(&self, command: &str) -> String {
        format!("{}\n", command)
    }

    fn export_path(&self, name: &str, val: &str, fallback: &str) -> String {
        format!(
            "\nif [ -n \"${{{name}}}\" ]; then\n    export {name}=\"{val}\"\nelse\n    export {name}=\"{fallback}\"\nfi\n"
        )
    }

    fn export_var(&self, name: &str, val: &str) -> String {
        format!("export {}=\"{}\"\n", name, val)
    }

    fn source_file(&self, path: &str) -> String {
        format!(". \"{}\"\n", path)
    }

    fn unexport_var(&self, name: &str) -> String {
        format!("unset {}\n", name)
    }

    fn dedup_path(&self, name: &str, helper: &str) -> String {
        format!(
            "\nif [ -n \"${{{name}}}\" ]; then\n    export {name}=\"$({helper} ${{{name}}})\"\nfi\n"
        )
    }
}
