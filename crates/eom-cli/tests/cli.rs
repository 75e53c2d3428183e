//! CLI command integration tests.
//! Each test works in its own temp directory for full isolation.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ENERGY_TEXT: &str = "\
Potential Energy:
m1*g*lg1*(1 - cos(q10(t))) + m2*g*(l1*(1 - cos(q10(t))) + lg2*(1 - cos(q12(t))))

Translational Kinetic Energy:
0.5*m1*lg1^2*q10_dot^2 + 0.5*m2*(l1^2*q10_dot^2 + lg2^2*q12_dot^2 + 2*l1*lg2*q10_dot*q12_dot*cos(q10(t) - q12(t)))

Rotational Kinetic Energy:
0.5*I1*(q11_dot^2 + q10_dot^2) + 0.5*Iyy2*(q13_dot + theta2_dot)^2
";

const ARTIFACTS: [&str; 4] = [
    "lagrange_equation_0_q0.txt",
    "lagrange_equation_1_q1.txt",
    "lagrange_equation_2_q2.txt",
    "lagrange_equation_3_q3.txt",
];

fn eom_cmd() -> Command {
    #[allow(deprecated)]
    let cmd = Command::cargo_bin("eom").unwrap();
    cmd
}

fn write_input(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("energies.txt");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn derive_produces_one_artifact_per_coordinate() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, ENERGY_TEXT);
    let out_dir = dir.path().join("out");

    eom_cmd()
        .arg("derive")
        .arg(&input)
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("q0: ok"))
        .stdout(predicate::str::contains("q3: ok"));

    for name in ARTIFACTS {
        let content = std::fs::read_to_string(out_dir.join(name)).unwrap();
        assert!(!content.trim().is_empty(), "{name} should not be empty");
        // Joint-numbered placeholder tokens must never leak into an
        // artifact; the coordinates there are q0..q3.
        for token in ["q10", "q11", "q12", "q13", "(t)"] {
            assert!(!content.contains(token), "{name} carries a raw token: {content}");
        }
    }
}

#[test]
fn derive_rerun_overwrites_with_equal_content() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, ENERGY_TEXT);
    let out_dir = dir.path().join("out");

    let run = || {
        eom_cmd()
            .arg("derive")
            .arg(&input)
            .arg("--out-dir")
            .arg(&out_dir)
            .assert()
            .success();
    };

    run();
    let first: Vec<String> = ARTIFACTS
        .iter()
        .map(|name| std::fs::read_to_string(out_dir.join(name)).unwrap())
        .collect();

    run();
    for (name, expected) in ARTIFACTS.iter().zip(&first) {
        let content = std::fs::read_to_string(out_dir.join(name)).unwrap();
        assert_eq!(&content, expected, "{name} should be overwritten unchanged");
    }
}

#[test]
fn missing_section_header_aborts_before_derivation() {
    let dir = TempDir::new().unwrap();
    let broken = ENERGY_TEXT.replace("Translational Kinetic Energy:", "Kinetic Energy:");
    let input = write_input(&dir, &broken);
    let out_dir = dir.path().join("out");

    eom_cmd()
        .arg("derive")
        .arg(&input)
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Translational Kinetic Energy:"));

    // Fatal load error: nothing may have been dispatched or written.
    for name in ARTIFACTS {
        assert!(!out_dir.join(name).exists());
    }
}

#[test]
fn one_faulty_coordinate_does_not_abort_the_batch() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, ENERGY_TEXT);
    let out_dir = dir.path().join("out");
    std::fs::create_dir_all(&out_dir).unwrap();
    // A directory squatting on q2's artifact path fails that write.
    std::fs::create_dir(out_dir.join("lagrange_equation_2_q2.txt")).unwrap();

    eom_cmd()
        .arg("derive")
        .arg(&input)
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .failure()
        .stdout(predicate::str::contains("q2: failed"))
        .stdout(predicate::str::contains("q0: ok"))
        .stderr(predicate::str::contains("1 of 4"));

    for name in [ARTIFACTS[0], ARTIFACTS[1], ARTIFACTS[3]] {
        assert!(out_dir.join(name).is_file(), "{name} should still be written");
    }
}

#[test]
fn check_reports_parsed_energies() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, ENERGY_TEXT);

    eom_cmd()
        .arg("check")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("potential energy:"))
        .stdout(predicate::str::contains("rotational kinetic energy:"))
        // q11 and q13 only appear through their rates.
        .stdout(predicate::str::contains("placeholder `q11(t)` not found"))
        .stdout(predicate::str::contains("placeholder `q13(t)` not found"));
}

#[test]
fn unreadable_input_is_a_clean_error() {
    let dir = TempDir::new().unwrap();
    eom_cmd()
        .arg("derive")
        .arg(dir.path().join("no-such-file.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
