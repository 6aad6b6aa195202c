//! Common test utilities shared across integration tests.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Run the socialgraph binary in `dir` with colors disabled.
pub fn run_socialgraph_in_dir(dir: &Path, args: &[&str]) -> Output {
    run_socialgraph_with_input(dir, args, "")
}

/// Run the socialgraph binary in `dir`, feeding `input` on stdin.
pub fn run_socialgraph_with_input(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_socialgraph"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute socialgraph binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for socialgraph")
}
