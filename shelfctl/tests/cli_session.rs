use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn help_lists_config_flags() {
    let mut cmd = cargo_bin_cmd!("shelfctl");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--seed"))
        .stdout(predicate::str::contains("--no-prompt"));
}

#[test]
fn piped_script_builds_and_renders_catalog() {
    let script = "\
# stage then add
rate 5 3
song River
song \"A Case of You\"
add cd --title Blue --artist 'Joni Mitchell'
add movie --title Alien --director 'Ridley Scott' --runtime 117
toggle 1
titles
shuffle 0
remove 0
list
";
    let mut cmd = cargo_bin_cmd!("shelfctl");
    let output = cmd
        .args(["--seed", "3", "--no-prompt"])
        .env_remove("SHELF_CONFIG")
        .write_stdin(script)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);

    assert!(text.contains("Rating 5 added."));
    assert!(text.contains("[0] Blue (CD) - Checked Out: false - Average Rating: 4"));
    assert!(text.contains("Checked out: true"));
    assert!(text.contains("Blue, Alien"));
    assert!(text.contains("River") || text.contains("A Case of You"));
    assert!(text.contains("Removed 'Blue'."));
    assert!(text.contains("[0] Alien (Movie) - Checked Out: true - Average Rating: 0"));
}

#[test]
fn invalid_commands_do_not_end_the_session() {
    let mut cmd = cargo_bin_cmd!("shelfctl");
    cmd.arg("--no-prompt")
        .write_stdin("frobnicate\nadd vinyl --title Kind\nrate 0\ntitles\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("must be an instance of Media"))
        .stdout(predicate::str::contains("Rating should be between 1 and 5."));
}

#[test]
fn env_file_sets_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let env_path = dir.path().join("shelf.env");
    std::fs::write(&env_path, "SHELF_PROMPT=\"lib> \"\nSHELF_SHOW_PROMPT=yes\n")
        .unwrap();

    let mut cmd = cargo_bin_cmd!("shelfctl");
    cmd.arg("--env-file")
        .arg(&env_path)
        .env_remove("SHELF_PROMPT")
        .env_remove("SHELF_SHOW_PROMPT")
        .write_stdin("titles\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("lib> "));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("shelfctl");
    cmd.arg("--config")
        .arg(dir.path().join("absent.toml"))
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn missing_env_file_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("shelfctl");
    cmd.arg("--env-file")
        .arg(dir.path().join("absent.env"))
        .arg("--no-prompt")
        .env_remove("SHELF_CONFIG")
        .write_stdin("titles\n")
        .assert()
        .success();

    let mut cmd = cargo_bin_cmd!("shelfctl");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ignored if missing"));
}
