//! End-to-end tests for the `fullstate` binary.
//!
//! Each test runs the compiled binary against temporary files and checks its
//! exit status and output.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn fullstate(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fullstate"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to spawn fullstate")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

// ============================================================================
// run
// ============================================================================

mod run {
    use super::*;

    #[test]
    fn test_run_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(dir.path(), "bell.txt", "H(0)\nCX(0, 1)\nM(0)\nM(1)\n");

        let output = fullstate(&["run", "-i", &input, "-f", "json"]);
        assert!(output.status.success());

        let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        assert_eq!(report["num_qubits"], 2);
        assert_eq!(report["measure_order"], serde_json::json!([0, 1]));
        assert_eq!(report["probabilities"]["00"], 0.5);
        assert_eq!(report["probabilities"]["11"], 0.5);
    }

    #[test]
    fn test_run_table() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(dir.path(), "x.txt", "# flip\nX(1)\n");

        let output = fullstate(&["run", "-i", &input]);
        assert!(output.status.success());
        assert!(stdout(&output).contains("(0, 1)"));
    }

    #[test]
    fn test_run_with_yaml_config_and_collapse() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(dir.path(), "ghz.txt", "H(0)\nCX(0, 1)\nCX(1, 2)\nM(0)\nM(1)\nM(2)\n");
        let config = write(dir.path(), "sim.yaml", "seed: 11\nprecision: 3\n");

        let output = fullstate(&[
            "run", "-i", &input, "-c", &config, "-f", "json", "--collapse",
        ]);
        assert!(output.status.success());

        let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        let measured = report["measurements"].as_array().unwrap();
        assert_eq!(measured.len(), 3);
        assert_eq!(report["probabilities"].as_object().unwrap().len(), 1);
        assert_eq!(report["measurement_probability"], 0.5);
    }

    #[test]
    fn test_run_rejects_gate_after_measurement() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(dir.path(), "bad.txt", "M(0)\nX(0)\n");

        let output = fullstate(&["run", "-i", &input]);
        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("measurement"));

        let output = fullstate(&["run", "-i", &input, "--ignore-measurements"]);
        assert!(output.status.success());
    }

    #[test]
    fn test_run_missing_file() {
        let output = fullstate(&["run", "-i", "/nonexistent/circuit.txt"]);
        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("File not found"));
    }

    #[test]
    fn test_run_parse_error_names_line() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(dir.path(), "bad.txt", "H(0)\nCX 0 1\n");

        let output = fullstate(&["run", "-i", &input]);
        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("line 2"));
    }

    #[test]
    fn test_run_unknown_config_format() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(dir.path(), "x.txt", "X(0)\n");
        let config = write(dir.path(), "sim.toml", "seed = 1\n");

        let output = fullstate(&["run", "-i", &input, "-c", &config]);
        assert!(!output.status.success());
    }
}

// ============================================================================
// demo, show, gates, version
// ============================================================================

mod other_commands {
    use super::*;

    #[test]
    fn test_demo_ghz() {
        let output = fullstate(&["demo", "ghz", "-q", "4", "-f", "json"]);
        assert!(output.status.success());
        let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        assert_eq!(report["probabilities"]["0000"], 0.5);
        assert_eq!(report["probabilities"]["1111"], 0.5);
    }

    #[test]
    fn test_demo_unknown() {
        let output = fullstate(&["demo", "qft"]);
        assert!(!output.status.success());
    }

    #[test]
    fn test_show_renders_angles() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(
            dir.path(),
            "rz.txt",
            &format!("Rz_{}(0)\nCRz_{}(0, 1)\n", std::f64::consts::FRAC_PI_4, std::f64::consts::PI),
        );

        let output = fullstate(&["show", "-i", &input]);
        assert!(output.status.success());
        assert_eq!(stdout(&output), "Rz[π/4](0)\nCRz[π](0, 1)\n");

        let output = fullstate(&["show", "-i", &input, "--latex"]);
        assert!(stdout(&output).starts_with("Rz[\\frac{\\pi}{4}](0)"));
    }

    #[test]
    fn test_gates_lists_catalog() {
        let output = fullstate(&["gates"]);
        assert!(output.status.success());
        let text = stdout(&output);
        for name in ["CCRz", "CSWAP", "Sd", "M"] {
            assert!(text.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_version() {
        let output = fullstate(&["-v", "version"]);
        assert!(output.status.success());
        assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_no_subcommand() {
        assert!(!fullstate(&[]).status.success());
    }
}
