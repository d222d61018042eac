use assert_cmd::Command;

#[test]
fn exercises_lists_the_squat() {
    let mut cmd = Command::cargo_bin("formqc").unwrap();
    cmd.arg("exercises");
    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("squat\tBarbell Squat\t10 landmarks"), "stdout: {}", stdout);
    for name in ["left_shoulder", "right_hip", "left_knee", "right_heel"] {
        assert!(stdout.contains(name), "missing {} in {}", name, stdout);
    }
}
