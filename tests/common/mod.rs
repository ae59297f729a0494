#![allow(dead_code)]

use assert_cmd::Command;
use tempfile::TempDir;

pub fn assistant_cmd() -> Command {
    let mut cmd = Command::cargo_bin("assistant").unwrap();
    cmd.env_remove("ASSISTANT_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A fresh temp directory with `assistant init` already run
pub fn init_workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    assistant_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

/// Run `assistant <args>` inside `dir` and expect success
pub fn run_ok(dir: &TempDir, args: &[&str]) -> String {
    let output = assistant_cmd()
        .current_dir(dir.path())
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "assistant {:?} failed.\nstderr:\n{}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}
