use std::env;
use std::process::Command;

const UNKNOWN: &str = "unknown";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let hash = run("git", &["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| UNKNOWN.into());
    let status = match run("git", &["status", "--porcelain"]) {
        Some(output) if output.is_empty() => "clean",
        Some(_) => "dirty",
        None => UNKNOWN,
    };
    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let target = env::var("TARGET").unwrap_or_else(|_| UNKNOWN.into());
    let profile = env::var("PROFILE").unwrap_or_else(|_| UNKNOWN.into());
    let rustc = run("rustc", &["--version"]).unwrap_or_else(|| UNKNOWN.into());

    emit("HASH", &hash);
    emit("STATUS", status);
    emit("TIMESTAMP", &timestamp);
    emit("TARGET", &target);
    emit("PROFILE", &profile);
    emit("RUSTC", &rustc);
}

fn emit(key: &str, value: &str) {
    println!("cargo:rustc-env=VENUE_CORE_BUILD_{key}={value}");
}

/// Runs a command and returns its trimmed stdout when it exits successfully.
fn run(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|stdout| stdout.trim().to_string())
}
