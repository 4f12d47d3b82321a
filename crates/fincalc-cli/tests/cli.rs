//! End-to-end tests for the `fincalc` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs the binary against a private settings file.
fn fincalc(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fincalc").unwrap();
    cmd.env("FINCALC_CONFIG", dir.path().join("config.json"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn irr_minimal() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["irr", "--cash-flows", "-1000, 300, 400, 500", "--format", "minimal"])
        .assert()
        .success()
        .stdout("8.90%\n");
}

#[test]
fn irr_without_sign_change_fails() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["irr", "--cash-flows", "-100,-50,-10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "IRR not found in the range -99% to 100%. Please check your cash flows.",
        ));
}

#[test]
fn irr_rejects_text() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["irr", "--cash-flows", "-1000, lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid number 'lots'"));
}

#[test]
fn ytm_json() {
    let dir = TempDir::new().unwrap();
    let output = fincalc(&dir)
        .args([
            "ytm", "--price", "950", "--face", "1000", "--coupon", "5", "--years", "10", "-f",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["Yield to Maturity"], "5.67%");
    assert_eq!(json["Price"], "$950.00");
}

#[test]
fn ytm_outside_range_fails() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["ytm", "--price", "1600", "--face", "1000", "--coupon", "5", "--years", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Yield not found in the range 0.01% to 100%. Please check your inputs.",
        ));
}

#[test]
fn ytm_rejects_unbounded_maturity() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["ytm", "--price", "950", "--face", "1000", "--coupon", "5"])
        .args(["--years", "3000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("years to maturity must be between 1 and 1000"));
}

#[test]
fn bond_table_output() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["bond", "price", "--face", "1000", "--coupon", "6", "--years", "3", "--rate", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bond Price"))
        .stdout(predicate::str::contains("$948.46"));
}

#[test]
fn perpetuity_zero_rate_fails() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["bond", "perpetuity", "--payment", "100", "--rate", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("discount rate must be greater than zero"));
}

#[test]
fn payback_csv() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["capital", "payback", "--cash-flows", "-1000,300,400,500", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("key,value\n"))
        .stdout(predicate::str::contains("Payback Period,2.60 periods"));
}

#[test]
fn menu_reads_stdin() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .arg("menu")
        .write_stdin("3\n3\n10000\n5\n30\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Net Recovery Value: $6650.00"));
}

#[test]
fn settings_change_precision() {
    let dir = TempDir::new().unwrap();

    fincalc(&dir)
        .args(["config", "set", "decimal_precision", "4"])
        .assert()
        .success();

    fincalc(&dir)
        .args(["config", "get", "precision", "--format", "minimal"])
        .assert()
        .success()
        .stdout("4\n");

    fincalc(&dir)
        .args(["irr", "-c", "-1000, 300, 400, 500", "-f", "minimal"])
        .assert()
        .success()
        .stdout("8.8963%\n");
}

#[test]
fn settings_reject_invalid_values() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["config", "set", "solver_tolerance", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for solver_tolerance"));

    fincalc(&dir)
        .args(["config", "set", "colour", "true"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key: colour"));
}

#[test]
fn iteration_cap_from_settings() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["config", "set", "solver_max_iterations", "5"])
        .assert()
        .success();

    fincalc(&dir)
        .args(["irr", "-c", "-1000, 300, 400, 500", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Iterations\": \"5\""))
        .stdout(predicate::str::contains("iteration cap reached"));
}

#[test]
fn solver_profile_file() {
    let dir = TempDir::new().unwrap();
    let profiles = dir.path().join("solvers.json");
    std::fs::write(
        &profiles,
        r#"{ "ytm": { "tolerance": 1e-6, "low": -0.5, "high": 1.0 } }"#,
    )
    .unwrap();

    fincalc(&dir)
        .args(["ytm", "--price", "1600", "--face", "1000", "--coupon", "5", "--years", "10"])
        .arg("--solvers")
        .arg(&profiles)
        .args(["-f", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("-"));
}

#[test]
fn config_path_minimal() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["config", "path", "-f", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"));
}
