//! Snapshot of the environment variables ssmuse reads.
//!
//! The library never calls `std::env::var` directly: the binary captures the
//! process environment once into an [`Environment`] and hands it down. Tests
//! build one from literal pairs instead.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::defaults::DOMAIN_BASE_VARS;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%([A-Za-z0-9_]+)%").expect("placeholder pattern is valid"));

/// Environment variables visible to one invocation.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        }
    }

    /// Build an environment from name/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Get a variable, `None` if unset.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Get a variable, treating an empty value as unset.
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    /// Base directory for relative domain and package paths.
    ///
    /// The first of `SSMUSE_DOMAIN_BASE`, `SSMUSE_BASE` and `SSM_DOMAIN_BASE`
    /// with a non-empty value wins.
    pub fn domain_base(&self) -> Option<&str> {
        DOMAIN_BASE_VARS
            .iter()
            .find_map(|name| self.get_non_empty(name))
    }

    /// Replace `%NAME%` placeholders with the value of `NAME`.
    ///
    /// A placeholder naming an unset variable is left in place, literally.
    pub fn expand_placeholders(&self, text: &str) -> String {
        PLACEHOLDER
            .replace_all(text, |caps: &Captures<'_>| match self.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }

    /// Read a `:`-separated list variable, expanding placeholders and
    /// dropping empty items. An unset variable yields an empty list.
    pub fn path_list(&self, name: &str) -> Vec<String> {
        match self.get(name) {
            Some(raw) => self
                .expand_placeholders(raw)
                .split(':')
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        }
    }
}
