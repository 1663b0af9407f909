//! Self-identification of the library for logs and service handshakes

use std::fmt;

use once_cell::sync::Lazy;

use crate::git;

/// Library name, always the first token of [`VersionInfo::full_version`]
pub const LIB_NAME: &str = "powertelemetry";

const UNKNOWN: &str = "unknown";

/// Build identity: library name, version and source-control position
///
/// Version, branch and commit are injected at build time (see `build.rs`)
/// and may be empty; empty fields render as `unknown`. A detached-HEAD
/// branch (`HEAD`) counts as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    lib_name: String,
    version: String,
    branch: String,
    commit: String,
}

static CURRENT: Lazy<VersionInfo> = Lazy::new(|| {
    VersionInfo::new(
        env!("POWERTELEMETRY_VERSION"),
        env!("POWERTELEMETRY_GIT_BRANCH"),
        env!("POWERTELEMETRY_GIT_COMMIT"),
    )
});

impl VersionInfo {
    pub fn new(
        version: impl Into<String>,
        branch: impl Into<String>,
        commit: impl Into<String>,
    ) -> Self {
        let branch: String = branch.into();
        Self {
            lib_name: LIB_NAME.to_string(),
            version: version.into(),
            branch: git::branch_name(&branch).to_string(),
            commit: commit.into(),
        }
    }

    /// Identity of the running binary
    pub fn current() -> &'static VersionInfo {
        &CURRENT
    }

    pub fn lib_name(&self) -> &str {
        &self.lib_name
    }

    pub fn version(&self) -> &str {
        or_unknown(&self.version)
    }

    pub fn branch(&self) -> &str {
        or_unknown(&self.branch)
    }

    pub fn commit(&self) -> &str {
        or_unknown(&self.commit)
    }

    /// Whether any source-control field was injected
    pub fn has_git(&self) -> bool {
        !self.branch.is_empty() || !self.commit.is_empty()
    }

    /// `<lib> <version> [(git: <branch>@<commit>)]`
    ///
    /// The git descriptor is omitted when branch and commit are both empty.
    pub fn full_version(&self) -> String {
        let mut tokens = vec![self.lib_name.clone(), self.version().to_string()];
        if self.has_git() {
            tokens.push(format!("(git: {}@{})", self.branch(), self.commit()));
        }
        tokens.join(" ")
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_version())
    }
}

fn or_unknown(value: &str) -> &str {
    if value.is_empty() {
        UNKNOWN
    } else {
        value
    }
}

/// Full version string of the running binary
pub fn full_version() -> String {
    VersionInfo::current().full_version()
}
