//! Shared helpers for CLI end-to-end tests.

#![allow(dead_code, reason = "each e2e binary uses a subset of the helpers")]

use std::io;
use std::path::PathBuf;
use std::process::{Command, Output};

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn paramcheck(args: &[&str]) -> io::Result<Output> {
    paramcheck_with_env(args, &[])
}

pub fn paramcheck_with_env(args: &[&str], env: &[(&str, &str)]) -> io::Result<Output> {
    let mut command = Command::new(env!("CARGO_BIN_EXE_paramcheck"));
    command
        .args(args)
        .env_remove("PARAMCHECK_RULES")
        .env_remove("PARAMCHECK_OUTPUT")
        .env_remove("PARAMCHECK_LOG")
        .env_remove("PARAMCHECK_LOG_FORMAT");
    for (key, value) in env {
        command.env(key, value);
    }
    command.output()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
