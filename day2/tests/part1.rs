use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day2_part1").unwrap();
    cmd.arg("inputs.txt");

    cmd.assert().success().stdout(str::contains("is 150."));
}
