//! Integration tests running the pgprobe binary against a fake PATH.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const DIAGNOSTIC: &str = "No pg_config found in your path.\n\
                          Please check if you installed the PostgreSQL development packages.\n";

/// Write a shell script into `dir` with the given mode.
fn write_script(dir: &Path, name: &str, body: &str, mode: u32) {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
    }
    #[cfg(not(unix))]
    let _ = mode;
}

fn pg_config(dir: &Path) {
    write_script(dir, "pg_config", "echo /usr/include/postgresql", 0o755);
}

fn python(dir: &Path, version: &str) {
    write_script(dir, "python", &format!("echo 'Python {}'", version), 0o755);
}

fn legacy_python(dir: &Path) {
    write_script(dir, "python2.7", "echo 'Python 2.7.18' >&2", 0o755);
}

/// Build a pgprobe command whose PATH is exactly `dir`.
fn pgprobe(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("pgprobe"));
    cmd.env("PATH", dir)
        .env_remove("PGPROBE_PG_CONFIG")
        .env_remove("PGPROBE_PYTHON")
        .env_remove("PGPROBE_LEGACY_PYTHON")
        .env_remove("RUST_LOG");
    cmd
}

#[cfg(unix)]
#[test]
fn reports_python_version_when_pg_config_present() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    pg_config(temp.path());
    python(temp.path(), "3.11.4");
    legacy_python(temp.path());

    pgprobe(temp.path())
        .assert()
        .success()
        .stdout("Using python 3.1.\n");
    Ok(())
}

#[cfg(unix)]
#[test]
fn fails_when_pg_config_absent() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    python(temp.path(), "3.11.4");

    pgprobe(temp.path()).assert().code(1).stdout(DIAGNOSTIC);
    Ok(())
}

#[cfg(unix)]
#[test]
fn fails_when_pg_config_not_executable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write_script(temp.path(), "pg_config", "exit 0", 0o644);
    python(temp.path(), "3.11.4");

    pgprobe(temp.path()).assert().code(1).stdout(DIAGNOSTIC);
    Ok(())
}

#[cfg(unix)]
#[test]
fn repeated_runs_are_identical() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    pg_config(temp.path());
    python(temp.path(), "3.9.18");

    let first = pgprobe(temp.path()).output()?;
    let second = pgprobe(temp.path()).output()?;
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(String::from_utf8(first.stdout)?, "Using python 3.9.\n");
    Ok(())
}

#[cfg(unix)]
#[test]
fn missing_legacy_python_does_not_matter() -> Result<(), Box<dyn std::error::Error>> {
    let with_legacy = TempDir::new()?;
    pg_config(with_legacy.path());
    python(with_legacy.path(), "3.11.4");
    legacy_python(with_legacy.path());

    let without_legacy = TempDir::new()?;
    pg_config(without_legacy.path());
    python(without_legacy.path(), "3.11.4");

    let a = pgprobe(with_legacy.path()).output()?;
    let b = pgprobe(without_legacy.path()).output()?;
    assert_eq!(a.status.code(), Some(0));
    assert_eq!(a.status.code(), b.status.code());
    assert_eq!(a.stdout, b.stdout);
    Ok(())
}

#[cfg(unix)]
#[test]
fn missing_python_still_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    pg_config(temp.path());

    pgprobe(temp.path())
        .assert()
        .success()
        .stdout("Using python .\n");
    Ok(())
}

#[cfg(unix)]
#[test]
fn json_output_includes_legacy_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    pg_config(temp.path());
    python(temp.path(), "3.11.4");
    legacy_python(temp.path());

    let output = pgprobe(temp.path()).arg("--json").output()?;
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["python_version"], "3.1");
    assert_eq!(value["legacy_version"], "2.7");
    Ok(())
}

#[cfg(unix)]
#[test]
fn debug_logs_go_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    pg_config(temp.path());
    python(temp.path(), "3.11.4");

    pgprobe(temp.path())
        .arg("--debug")
        .assert()
        .success()
        .stdout("Using python 3.1.\n")
        .stderr(predicate::str::contains("pg_config"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn env_overrides_interpreter() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    pg_config(temp.path());
    write_script(temp.path(), "python3", "echo 'Python 3.12.0'", 0o755);

    pgprobe(temp.path())
        .env("PGPROBE_PYTHON", "python3")
        .assert()
        .success()
        .stdout("Using python 3.1.\n");
    Ok(())
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pgprobe"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PostgreSQL"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pgprobe"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}
