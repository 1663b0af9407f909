use std::env;
use std::process::Command;

#[path = "git.rs"]
mod git;

const VERSION_VAR: &str = "POWERTELEMETRY_VERSION";
const BRANCH_VAR: &str = "POWERTELEMETRY_GIT_BRANCH";
const COMMIT_VAR: &str = "POWERTELEMETRY_GIT_COMMIT";

fn run_git(args: &[&str]) -> Option<String> {
    let out = Command::new("git").args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8(out.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

/// Rerun when HEAD moves: a checkout rewrites HEAD, a commit rewrites the
/// branch ref (loose, or in packed-refs after gc)
fn watch_head() {
    let Some(head) = run_git(&["rev-parse", "--git-path", "HEAD"]) else {
        return;
    };

    let mut paths = vec![head];
    let symbolic = run_git(&["rev-parse", "--symbolic-full-name", "HEAD"]).unwrap_or_default();
    if let Some(reference) = git::head_ref(&symbolic) {
        paths.extend(run_git(&["rev-parse", "--git-path", reference]));
    }
    paths.extend(run_git(&["rev-parse", "--git-path", "packed-refs"]));

    for line in git::rerun_directives(&paths) {
        println!("{line}");
    }
}

fn main() {
    // Any rerun-if line disables Cargo's default of rerunning on every
    // package change, so the git files must be listed explicitly
    for var in [VERSION_VAR, BRANCH_VAR, COMMIT_VAR] {
        println!("cargo:rerun-if-env-changed={var}");
    }
    watch_head();

    // Values set by the builder win; otherwise fall back to the package
    // version and whatever git reports. Missing values stay empty and are
    // rendered as "unknown" at runtime.
    let version = env::var(VERSION_VAR)
        .or_else(|_| env::var("CARGO_PKG_VERSION"))
        .unwrap_or_default();
    let branch = env::var(BRANCH_VAR)
        .ok()
        .or_else(|| run_git(&["rev-parse", "--abbrev-ref", "HEAD"]))
        .unwrap_or_default();
    let commit = env::var(COMMIT_VAR)
        .ok()
        .or_else(|| run_git(&["rev-parse", "--short", "HEAD"]))
        .unwrap_or_default();

    println!("cargo:rustc-env={VERSION_VAR}={version}");
    println!("cargo:rustc-env={BRANCH_VAR}={}", git::branch_name(&branch));
    println!("cargo:rustc-env={COMMIT_VAR}={commit}");
}
