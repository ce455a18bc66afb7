use assert_cmd::Command;

#[test]
fn snapshot_with_demo_orders_lists_every_column() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("ticketrail").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("snapshot")
        .arg("--demo")
        .arg("4")
        .assert()
        .success()
        .stdout(predicates::str::contains("Ordered"))
        .stdout(predicates::str::contains("Preparing"))
        .stdout(predicates::str::contains("Ready"))
        .stdout(predicates::str::contains("Delivered"))
        .stdout(predicates::str::contains("Double cheeseburger"))
        .stdout(predicates::str::contains("table 4"))
        .stdout(predicates::str::contains("Seeded 4 demo orders"));
}

#[test]
fn snapshot_of_an_empty_board_says_so() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("ticketrail").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("snapshot")
        .assert()
        .success()
        .stdout(predicates::str::contains("The board is empty."));
}

#[test]
fn snapshot_json_emits_the_orders() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("ticketrail").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("snapshot")
        .arg("--demo")
        .arg("2")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicates::str::contains("\"title\""))
        .stdout(predicates::str::contains("Double cheeseburger"))
        .stdout(predicates::str::contains("\"column\": \"ordered\""));
}

#[test]
fn snapshot_respects_a_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join(".ticketrail.json"),
        r#"{ "demo_orders": 3 }"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("ticketrail").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("snapshot")
        .assert()
        .success()
        .stdout(predicates::str::contains("Seeded 3 demo orders"));
}

#[test]
fn help_mentions_the_board() {
    let mut cmd = Command::cargo_bin("ticketrail").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("kanban board"))
        .stdout(predicates::str::contains("snapshot"));
}
