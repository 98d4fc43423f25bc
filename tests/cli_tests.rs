//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command bound to an isolated store and an absent config file
fn calc(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("cgpa-calc").unwrap();
    cmd.arg("--store")
        .arg(dir.path().join("store"))
        .arg("--config")
        .arg(dir.path().join("config.yaml"))
        .env_remove("RUST_LOG");
    cmd
}

/// Same as `calc` but with a config file written first
fn calc_with_config(dir: &TempDir, yaml: &str) -> Command {
    std::fs::write(dir.path().join("config.yaml"), yaml).unwrap();
    calc(dir)
}

fn enter_math_marks(dir: &TempDir) {
    for (field, value) in [
        ("q1", "8"),
        ("q2", "9"),
        ("t1", "40"),
        ("t2", "35"),
        ("matlab", "15"),
        ("el", "18"),
    ] {
        calc_with_config(dir, "{}\n")
            .args(["set", "math", field, value])
            .assert()
            .success();
    }
}

#[test]
fn missing_explicit_config_is_config_error() {
    let dir = TempDir::new().unwrap();
    calc(&dir)
        .arg("show")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn invalid_config_reports_all_errors() {
    let dir = TempDir::new().unwrap();
    calc_with_config(&dir, "namespace: \"a b\"\noverride_credits: 0\n")
        .arg("show")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("namespace"))
        .stderr(predicate::str::contains("override_credits"));
}

#[test]
fn subjects_lists_curriculum() {
    let dir = TempDir::new().unwrap();
    calc_with_config(&dir, "{}\n")
        .args(["subjects", "--gpa", "chemistry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chemistry Cycle:"))
        .stdout(predicate::str::contains("yoga | Yoga | 1 credits | regular"));
}

#[test]
fn mode_and_cycle_persist() {
    let dir = TempDir::new().unwrap();
    calc_with_config(&dir, "{}\n")
        .args(["mode", "final-grade"])
        .assert()
        .success();
    calc_with_config(&dir, "{}\n")
        .args(["cycle", "physics"])
        .assert()
        .success();

    calc_with_config(&dir, "{}\n")
        .arg("mode")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode: final-grade"));
    calc_with_config(&dir, "{}\n")
        .arg("cycle")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cycle: physics"));
}

#[test]
fn set_requires_cycle() {
    let dir = TempDir::new().unwrap();
    calc_with_config(&dir, "{}\n")
        .args(["set", "math", "q1", "8"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No cycle selected"));
}

#[test]
fn cie_total_for_math_example() {
    let dir = TempDir::new().unwrap();
    calc_with_config(&dir, "{}\n")
        .args(["cycle", "physics"])
        .assert()
        .success();
    enter_math_marks(&dir);

    calc_with_config(&dir, "{}\n")
        .args(["cie", "math"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mathematics (math): CIE 80/100"));
}

#[test]
fn rejected_marks_keep_previous_value() {
    let dir = TempDir::new().unwrap();
    calc_with_config(&dir, "{}\n")
        .args(["cycle", "physics"])
        .assert()
        .success();
    calc_with_config(&dir, "{}\n")
        .args(["set", "math", "q1", "8"])
        .assert()
        .success();

    calc_with_config(&dir, "{}\n")
        .args(["set", "math", "q1", "11"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Maximum value allowed is 10"));
    calc_with_config(&dir, "{}\n")
        .args(["set", "math", "q1", "-3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Enter numeric values only"));

    calc_with_config(&dir, "{}\n")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("math: q1=8"));
}

#[test]
fn unknown_subject_is_input_error() {
    let dir = TempDir::new().unwrap();
    calc_with_config(&dir, "{}\n")
        .args(["cycle", "chemistry"])
        .assert()
        .success();
    calc_with_config(&dir, "{}\n")
        .args(["set", "math", "q1", "8"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown subject 'math'"));
}

#[test]
fn see_requirements_table() {
    let dir = TempDir::new().unwrap();
    calc_with_config(&dir, "{}\n")
        .args(["cycle", "physics"])
        .assert()
        .success();
    enter_math_marks(&dir);

    calc_with_config(&dir, "{}\n")
        .args(["see", "math"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SEE Requirements for Mathematics (CIE: 80):"))
        .stdout(predicate::str::contains("Grade 7 (B+): 40.0 marks"))
        .stdout(predicate::str::contains("Minimum SEE (35 marks) gives Grade 6 (B)"));
}

#[test]
fn final_grade_and_cycle_sgpa() {
    let dir = TempDir::new().unwrap();
    calc_with_config(&dir, "{}\n")
        .args(["cycle", "physics"])
        .assert()
        .success();
    enter_math_marks(&dir);
    calc_with_config(&dir, "{}\n")
        .args(["set", "math", "see", "70"])
        .assert()
        .success();

    calc_with_config(&dir, "{}\n")
        .arg("grade")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grade 8 (A) | CIE: 80 | SEE: 70 | Total: 75.00"))
        .stdout(predicate::str::contains("Physics (phy): no marks entered"))
        .stdout(predicate::str::contains("Physics Cycle SGPA: 8.00/10"));
}

#[test]
fn sgpa_and_cgpa_from_selections() {
    let dir = TempDir::new().unwrap();
    calc_with_config(&dir, "{}\n")
        .arg("cgpa")
        .assert()
        .success()
        .stdout(predicate::str::contains("CGPA: 0.00/10"));

    calc_with_config(&dir, "{}\n")
        .args(["gpa-grade", "physics", "math", "A+"])
        .assert()
        .success();
    calc_with_config(&dir, "{}\n")
        .args(["gpa-grade", "physics", "phy", "8"])
        .assert()
        .success();
    calc_with_config(&dir, "{}\n")
        .args(["sgpa", "physics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Physics Cycle SGPA: 8.50/10"));

    // chemistry override 9.0 weighs 20 credits: (68 + 180) / 28 = 8.857
    calc_with_config(&dir, "{}\n")
        .args(["sgpa-override", "chemistry", "9"])
        .assert()
        .success();
    calc_with_config(&dir, "{}\n")
        .arg("cgpa")
        .assert()
        .success()
        .stdout(predicate::str::contains("CGPA: 8.86/10"));
}

#[test]
fn override_credits_from_config() {
    let dir = TempDir::new().unwrap();
    let yaml = "override_credits: 10\n";
    calc_with_config(&dir, yaml)
        .args(["gpa-grade", "physics", "math", "10"])
        .assert()
        .success();
    calc_with_config(&dir, yaml)
        .args(["sgpa-override", "chemistry", "7"])
        .assert()
        .success();

    // (40 + 70) / 14 = 7.857
    calc_with_config(&dir, yaml)
        .arg("cgpa")
        .assert()
        .success()
        .stdout(predicate::str::contains("CGPA: 7.86/10"));
}

#[test]
fn invalid_gpa_inputs() {
    let dir = TempDir::new().unwrap();
    calc_with_config(&dir, "{}\n")
        .args(["gpa-grade", "physics", "math", "3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a grade"));
    calc_with_config(&dir, "{}\n")
        .args(["sgpa-override", "physics", "10.5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Maximum value allowed is 10"));
}

#[test]
fn reset_sections() {
    let dir = TempDir::new().unwrap();
    calc_with_config(&dir, "{}\n")
        .args(["cycle", "physics"])
        .assert()
        .success();
    calc_with_config(&dir, "{}\n")
        .args(["set", "core", "el", "30"])
        .assert()
        .success();
    calc_with_config(&dir, "{}\n")
        .args(["gpa-grade", "physics", "core", "B"])
        .assert()
        .success();

    calc_with_config(&dir, "{}\n")
        .args(["reset", "--marks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marks cleared"));
    calc_with_config(&dir, "{}\n")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cycle: physics"))
        .stdout(predicate::str::contains("physics: core=B"))
        .stdout(predicate::str::contains("core: el=").not());

    calc_with_config(&dir, "{}\n")
        .arg("reset")
        .assert()
        .success();
    calc_with_config(&dir, "{}\n")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cycle: (none)"))
        .stdout(predicate::str::contains("GPA grades:\n  (none)"));
}

#[test]
fn corrupt_bucket_does_not_block_others() {
    let dir = TempDir::new().unwrap();
    calc_with_config(&dir, "{}\n")
        .args(["cycle", "chemistry"])
        .assert()
        .success();
    calc_with_config(&dir, "{}\n")
        .args(["set", "plc", "lab", "25"])
        .assert()
        .success();

    std::fs::write(
        dir.path().join("store").join("cgpa_calc_form_data.json"),
        "{ definitely not json",
    )
    .unwrap();

    calc_with_config(&dir, "{}\n")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cycle: chemistry"))
        .stdout(predicate::str::contains("Marks:\n  (none)"))
        .stderr(predicate::str::contains("ignoring corrupt"));
}

#[test]
fn init_writes_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("new/config.yaml");
    calc(&dir)
        .arg("init")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Config written to"));
    assert!(path.exists());

    calc(&dir).arg("init").arg(&path).assert().code(4);
}

#[test]
fn eval_follows_selected_mode() {
    let dir = TempDir::new().unwrap();
    calc_with_config(&dir, "{}\n")
        .args(["eval", "math"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No mode selected"));

    calc_with_config(&dir, "{}\n")
        .args(["cycle", "physics"])
        .assert()
        .success();
    enter_math_marks(&dir);
    calc_with_config(&dir, "{}\n")
        .args(["set", "math", "see", "70"])
        .assert()
        .success();

    calc_with_config(&dir, "{}\n")
        .args(["mode", "cie-final"])
        .assert()
        .success();
    calc_with_config(&dir, "{}\n")
        .args(["eval", "math"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mathematics (math): CIE 80/100"))
        .stdout(predicate::str::contains("SEE Requirements for Mathematics (CIE: 80):"))
        .stdout(predicate::str::contains("Total:").not());

    calc_with_config(&dir, "{}\n")
        .args(["mode", "final-grade"])
        .assert()
        .success();
    calc_with_config(&dir, "{}\n")
        .args(["eval", "math"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grade 8 (A) | CIE: 80 | SEE: 70 | Total: 75.00"))
        .stdout(predicate::str::contains("SEE Requirements").not());

    calc_with_config(&dir, "{}\n")
        .args(["gpa-grade", "chemistry", "chem", "O"])
        .assert()
        .success();
    calc_with_config(&dir, "{}\n")
        .args(["mode", "final-cgpa"])
        .assert()
        .success();
    calc_with_config(&dir, "{}\n")
        .arg("eval")
        .assert()
        .success()
        .stdout(predicate::str::contains("Physics Cycle SGPA: 0.00/10"))
        .stdout(predicate::str::contains("Chemistry Cycle SGPA: 10.00/10"))
        .stdout(predicate::str::contains("CGPA: 10.00/10"));
    calc_with_config(&dir, "{}\n")
        .args(["eval", "math"])
        .assert()
        .code(1);
}

#[test]
fn see_table_flags_failing_cie() {
    let dir = TempDir::new().unwrap();
    calc_with_config(&dir, "{}\n")
        .args(["cycle", "physics"])
        .assert()
        .success();
    calc_with_config(&dir, "{}\n")
        .args(["see", "core"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CIE below 40: subject fails regardless of SEE"));
}

#[test]
fn sgpa_override_without_value_clears_it() {
    let dir = TempDir::new().unwrap();
    calc_with_config(&dir, "{}\n")
        .args(["sgpa-override", "physics", "9"])
        .assert()
        .success();
    calc_with_config(&dir, "{}\n")
        .args(["sgpa-override", "physics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Physics Cycle SGPA override cleared"));
    calc_with_config(&dir, "{}\n")
        .args(["sgpa", "physics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Physics Cycle SGPA: 0.00/10"));
}

#[test]
fn oversized_override_credits_is_config_error() {
    let dir = TempDir::new().unwrap();
    calc_with_config(&dir, "override_credits: 3000000000\n")
        .arg("cgpa")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("exceeds the maximum of 100"));
}
