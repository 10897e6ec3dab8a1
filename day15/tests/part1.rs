use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day15_part1").unwrap();
    cmd.arg("inputs.txt");

    cmd.assert().success().stdout(str::contains("is 40."));
}

#[test]
fn part1_reject_missing_input_with_diagnostic() {
    let mut cmd = Command::cargo_bin("day15_part1").unwrap();
    cmd.arg("no_such_inputs.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("empty risk map"));
}
