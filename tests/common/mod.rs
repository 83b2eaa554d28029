#![allow(dead_code)]

use assert_cmd::Command;

pub fn wordypond_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wordypond").unwrap();
    cmd.env_remove("WORDYPOND_ROOT");
    cmd.env_remove("WORDYPOND_LOG");
    cmd
}

/// Run `add` in `dir` and return the printed id
pub fn add_week(dir: &std::path::Path, title: &str, words: &[&str]) -> String {
    let output = wordypond_cmd()
        .current_dir(dir)
        .arg("add")
        .arg(title)
        .args(words)
        .output()
        .unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}
