use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

fn synth_fs() -> Command {
    let mut cmd = Command::cargo_bin("synth_fs").unwrap();
    for key in ["SYNTH_FS_ROOT", "SYNTH_FS_LOG_LEVEL", "SYNTH_FS_LOG_FILE", "SYNTH_FS_PRESERVE_METADATA"] {
        cmd.env_remove(key);
    }
    cmd
}

#[test]
fn move_subcommand_copies_tree() {
    let td = tempdir().unwrap();
    fs::create_dir_all(td.path().join("src/sub")).unwrap();
    fs::write(td.path().join("src/a.txt"), "a").unwrap();
    fs::write(td.path().join("src/sub/b.txt"), "b").unwrap();

    let assert = synth_fs()
        .arg("--root")
        .arg(td.path())
        .args(["move", "src", "--dest"])
        .arg(td.path().join("out"))
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("Copied 2 file(s)"), "stdout: {stdout}");
    assert_eq!(fs::read_to_string(td.path().join("out/a.txt")).unwrap(), "a");
    assert_eq!(fs::read_to_string(td.path().join("out/sub/b.txt")).unwrap(), "b");
}

#[test]
fn replace_subcommand_prints_one_line_per_modified_file() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("setup.py"), "version = \"1.0\"\n").unwrap();
    fs::write(td.path().join("other.py"), "name = \"x\"\n").unwrap();

    let assert = synth_fs()
        .arg("--root")
        .arg(td.path())
        .args(["replace", "*.py", "--before", r#"version = ".*""#, "--after", r#"version = "2.0""#])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let lines: Vec<&str> = stdout.lines().filter(|l| l.starts_with("Replaced")).collect();
    assert_eq!(lines.len(), 1, "stdout: {stdout}");
    assert!(lines[0].starts_with("Replaced 'version = "), "stdout: {stdout}");
    assert!(lines[0].ends_with("setup.py."));
    assert_eq!(
        fs::read_to_string(td.path().join("setup.py")).unwrap(),
        "version = \"2.0\"\n"
    );
}

#[test]
fn invalid_regex_fails_with_nonzero_exit() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("a.txt"), "(").unwrap();

    let assert = synth_fs()
        .arg("--root")
        .arg(td.path())
        .args(["replace", "*.txt", "--before", "(", "--after", "x"])
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert_eq!(stderr.matches("replace failed").count(), 1, "stderr: {stderr}");
    assert_eq!(fs::read_to_string(td.path().join("a.txt")).unwrap(), "(");
}

#[test]
fn missing_literal_source_reports_not_found() {
    let td = tempdir().unwrap();

    let assert = synth_fs()
        .arg("--root")
        .arg(td.path())
        .current_dir(td.path())
        .args(["move", "--literal", "nope.txt", "--dest", "out"])
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert_eq!(stderr.matches("move failed").count(), 1, "stderr: {stderr}");
}

#[test]
fn sources_are_required() {
    synth_fs().arg("move").assert().failure();
}

#[test]
fn replace_without_matches_reports_and_leaves_files() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("a.txt"), "nothing here\n").unwrap();

    let assert = synth_fs()
        .arg("--root")
        .arg(td.path())
        .args(["replace", "*.txt", "--before", "absent", "--after", "x"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(!stdout.contains("Replaced"), "stdout: {stdout}");
    assert!(stdout.contains("No matches for 'absent' in 1 file(s)"), "stdout: {stdout}");
    assert_eq!(fs::read_to_string(td.path().join("a.txt")).unwrap(), "nothing here\n");
}

#[test]
fn unknown_log_level_fails_before_running() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("a.txt"), "a").unwrap();

    let assert = synth_fs()
        .arg("--root")
        .arg(td.path())
        .args(["--log-level", "loud", "move", "a.txt", "--dest"])
        .arg(td.path().join("out"))
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("invalid log level"), "stderr: {stderr}");
    assert!(!td.path().join("out").exists());
}
