//! Platform list resolution.
//!
//! SSM domains hold one subtree per platform identifier. Which identifiers
//! the current host accepts, and in which order of preference, comes from the
//! first configured source:
//!
//! 1. the `SSMUSE_PLATFORMS` environment variable,
//! 2. the `/etc/ssm/platforms` file,
//! 3. the output of the `__ssmuse_platforms.sh` helper.
//!
//! Sources list the most-preferred platform first. An empty result is not an
//! error: domain loading then matches nothing.

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

use log::{debug, warn};

use crate::defaults::{PLATFORMS_FILE, PLATFORMS_HELPER, PLATFORMS_VAR};
use crate::environment::Environment;

/// Ordered list of acceptable platforms, most-preferred first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Platforms {
    preferred: Vec<String>,
}

impl Platforms {
    /// Build a list from identifiers given most-preferred first.
    pub fn new<I, S>(platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            preferred: platforms.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse whitespace-separated identifiers, ignoring empty tokens.
    pub fn parse(text: &str) -> Self {
        Self::new(text.split_whitespace())
    }

    /// Resolve the platform list from the standard sources.
    pub fn resolve(env: &Environment, helper_dir: &Path) -> Self {
        Self::resolve_from(
            env,
            Path::new(PLATFORMS_FILE),
            &helper_dir.join(PLATFORMS_HELPER),
        )
    }

    /// Resolve the platform list from explicit file and helper locations.
    pub fn resolve_from(env: &Environment, file: &Path, helper: &Path) -> Self {
        let platforms = Self::read_source(env, file, helper);
        if platforms.is_empty() {
            warn!("no platforms configured; domains will load nothing");
        }
        platforms
    }

    fn read_source(env: &Environment, file: &Path, helper: &Path) -> Self {
        if let Some(value) = env.get(PLATFORMS_VAR) {
            debug!("platforms from {}", PLATFORMS_VAR);
            return Self::parse(value);
        }

        if file.exists() {
            debug!("platforms from {}", file.display());
            return match fs::read_to_string(file) {
                Ok(text) => Self::parse(&text),
                Err(e) => {
                    warn!("cannot read {}: {}", file.display(), e);
                    Self::default()
                }
            };
        }

        debug!("platforms from {}", helper.display());
        match Command::new(helper).stderr(Stdio::inherit()).output() {
            Ok(output) => Self::parse(&String::from_utf8_lossy(&output.stdout)),
            Err(e) => {
                warn!("cannot run {}: {}", helper.display(), e);
                Self::default()
            }
        }
    }

    /// Iterate from the most- to the least-preferred platform.
    pub fn best_to_worst(&self) -> impl Iterator<Item = &str> {
        self.preferred.iter().map(String::as_str)
    }

    /// Iterate from the least- to the most-preferred platform.
    pub fn worst_to_best(&self) -> impl Iterator<Item = &str> {
        self.preferred.iter().rev().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.preferred.is_empty()
    }

    /// Space-joined list, as shown in the script banner.
    pub fn joined(&self) -> String {
        self.preferred.join(" ")
    }
}
