//! Source-control position of the build
//!
//! Std-only: `build.rs` includes this file as a module, and the library
//! uses it to normalize injected values.

use std::path::Path;

/// What `git rev-parse --abbrev-ref HEAD` prints on a detached HEAD
pub const DETACHED_HEAD: &str = "HEAD";

/// Branch name from `--abbrev-ref HEAD` output; empty on a detached HEAD
pub fn branch_name(abbrev_ref: &str) -> &str {
    match abbrev_ref.trim() {
        DETACHED_HEAD => "",
        name => name,
    }
}

/// Ref HEAD points to, from `--symbolic-full-name HEAD` output
///
/// `None` on a detached HEAD, where git prints `HEAD` instead of a ref.
pub fn head_ref(symbolic_full_name: &str) -> Option<&str> {
    let name = symbolic_full_name.trim();
    name.starts_with("refs/").then_some(name)
}

/// `cargo:rerun-if-changed` lines for the git files that move with HEAD
///
/// Paths that do not exist are skipped: Cargo reruns the build script on
/// every build for a missing path. A loose ref disappears after `git gc`
/// packs it, and `packed-refs` may not exist yet.
pub fn rerun_directives<I, P>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .filter(|path| path.as_ref().exists())
        .map(|path| format!("cargo:rerun-if-changed={}", path.as_ref().display()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_name_detached() {
        assert_eq!(branch_name("HEAD\n"), "");
        assert_eq!(branch_name("main\n"), "main");
        assert_eq!(branch_name("release/1.0"), "release/1.0");
        assert_eq!(branch_name(""), "");
    }

    #[test]
    fn test_head_ref() {
        assert_eq!(head_ref("refs/heads/main\n"), Some("refs/heads/main"));
        assert_eq!(head_ref("HEAD\n"), None);
        assert_eq!(head_ref(""), None);
    }

    #[test]
    fn test_rerun_directives_watch_existing_files() {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
        let build_script = manifest.join("build.rs");
        let missing = manifest.join("no-such-ref");

        let lines = rerun_directives([&build_script, &missing]);
        assert_eq!(
            lines,
            vec![format!("cargo:rerun-if-changed={}", build_script.display())]
        );
    }
}
