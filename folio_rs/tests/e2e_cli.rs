//! End-to-end tests for the `folio` binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// `folio` with colours off so assertions see plain text.
fn folio() -> Command {
    let mut cmd = cargo_bin_cmd!("folio");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn json_of(args: &[&str]) -> Value {
    let output = folio().args(args).output().unwrap();
    assert!(output.status.success(), "{args:?} failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

fn values(frame: &Value) -> Vec<u64> {
    frame["bars"]
        .as_array()
        .unwrap()
        .iter()
        .map(|bar| bar["value"].as_u64().unwrap())
        .collect()
}

// ============================================
// Basics
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        folio()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("sort"))
            .stdout(predicate::str::contains("constellation"));
    }

    #[test]
    fn shows_version() {
        folio()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn requires_a_subcommand() {
        folio().assert().failure();
    }
}

// ============================================
// Sort / search
// ============================================

mod sorting {
    use super::*;

    #[test]
    fn bubble_sorts_given_values() {
        folio()
            .args(["sort", "bubble", "5", "3", "8", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Bubble Sort"))
            .stdout(predicate::str::contains("O(n^2)"));
    }

    #[test]
    fn json_frames_end_sorted() {
        for algorithm in ["bubble", "quick", "merge"] {
            let frames = json_of(&["sort", algorithm, "9", "2", "7", "2", "5", "--json"]);
            let frames = frames.as_array().unwrap();
            let last = frames.last().unwrap();
            assert_eq!(values(last), vec![2, 2, 5, 7, 9], "{algorithm}");
            assert!(
                last["bars"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .all(|bar| bar["state"] == "sorted")
            );
        }
    }

    #[test]
    fn seed_makes_random_input_reproducible() {
        let a = json_of(&["--seed", "7", "sort", "quick", "--json"]);
        let b = json_of(&["--seed", "7", "sort", "quick", "--json"]);
        assert_eq!(a, b);
        assert_eq!(values(&a[0]).len(), 20);
    }

    #[test]
    fn rejects_search_algorithm() {
        folio()
            .args(["sort", "binary"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("folio search"));
    }

    #[test]
    fn rejects_unknown_algorithm() {
        folio()
            .args(["sort", "bogo"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown algorithm"));
    }
}

mod searching {
    use super::*;

    #[test]
    fn binary_search_reports_hit() {
        folio()
            .args(["search", "binary", "--target", "42", "3", "9", "42", "50", "61"])
            .assert()
            .success()
            .stdout(predicate::str::contains("found 42 at index 2"));
    }

    #[test]
    fn linear_search_reports_miss() {
        folio()
            .args(["search", "linear", "--target", "4", "1", "2", "3"])
            .assert()
            .success()
            .stdout(predicate::str::contains("4 not found"));
    }

    #[test]
    fn binary_json_carries_bounds() {
        let frames = json_of(&["search", "binary", "--target", "8", "1", "8", "9", "--json"]);
        assert_eq!(frames[0]["bounds"]["mid"], 1);
        assert_eq!(frames.as_array().unwrap().last().unwrap()["bars"][1]["state"], "found");
    }
}

// ============================================
// Content
// ============================================

mod content {
    use super::*;

    #[test]
    fn prints_profile_summary() {
        folio()
            .args(["content", "--section", "profile"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Axel Sundqvist"))
            .stdout(predicate::str::contains("Linköping"));
    }

    #[test]
    fn blog_json_lists_slugs() {
        let posts = json_of(&["content", "--section", "blog", "--json"]);
        let slugs: Vec<_> = posts
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["slug"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(slugs, vec!["blog1", "blog2", "blog3", "blog4", "blog5"]);
    }

    #[test]
    fn full_dump_has_every_table() {
        let site = json_of(&["content", "--json"]);
        for key in ["profile", "projects", "skills", "stats", "posts", "nav"] {
            assert!(site.get(key).is_some(), "missing {key}");
        }
    }
}

// ============================================
// Signal / constellation
// ============================================

mod demos {
    use super::*;

    #[test]
    fn signal_summary() {
        folio()
            .args(["signal", "filter", "--cutoff", "20"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Low-Pass Filter"))
            .stdout(predicate::str::contains("window 5"));
    }

    #[test]
    fn signal_json_shape() {
        let frame = json_of(&["signal", "am", "--json"]);
        assert_eq!(frame["amplitude"].as_array().unwrap().len(), 400);
        assert_eq!(frame["spectrum"].as_array().unwrap().len(), 50);
    }

    #[test]
    fn constellation_json() {
        let report = json_of(&[
            "--seed", "1", "constellation", "16qam", "--snr", "20", "--count", "10", "--json",
        ]);
        assert_eq!(report["modulation"], "16QAM");
        assert_eq!(report["ideal"].as_array().unwrap().len(), 16);
        assert_eq!(report["received"].as_array().unwrap().len(), 10);
        assert!((report["noise_level"].as_f64().unwrap() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn constellation_accepts_negative_snr_and_mimo() {
        folio()
            .args(["constellation", "bpsk", "--snr", "-5", "--scenario", "mimo:3"])
            .assert()
            .success()
            .stdout(predicate::str::contains("mimo 3x3"));
    }

    #[test]
    fn rejects_unknown_modulation() {
        folio()
            .args(["constellation", "8psk"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown modulation"));
    }
}

// ============================================
// Config
// ============================================

mod config {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let temp = TempDir::new().unwrap();
        folio()
            .current_dir(temp.path())
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("cooldown_ms = 800.0"))
            .stdout(predicate::str::contains("folio-ui-theme"));
    }

    #[test]
    fn reads_dot_folio_config() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(".folio")).unwrap();
        std::fs::write(
            temp.path().join(".folio/config.toml"),
            "[navigator]\ncooldown_ms = 500\n",
        )
        .unwrap();
        folio()
            .current_dir(temp.path())
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("cooldown_ms = 500.0"));
    }

    #[test]
    fn invalid_dot_folio_config_falls_back() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(".folio")).unwrap();
        std::fs::write(temp.path().join(".folio/config.toml"), "navigator = [").unwrap();
        folio()
            .current_dir(temp.path())
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("cooldown_ms = 800.0"));
    }

    #[test]
    fn explicit_invalid_path_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        std::fs::write(&path, "[theme]\ndefault = \"neon\"\n").unwrap();
        folio()
            .args(["config", "--path"])
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid config"));
    }

    #[test]
    fn global_config_flag_is_honoured() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        std::fs::write(&path, "[background]\nmode = \"data-flow\"\n").unwrap();
        folio()
            .arg("--config")
            .arg(&path)
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("mode = \"data-flow\""));
    }

    #[test]
    fn global_config_flag_is_strict_for_every_command() {
        let temp = TempDir::new().unwrap();
        let broken = temp.path().join("broken.toml");
        std::fs::write(&broken, "navigator = [").unwrap();
        folio()
            .arg("--config")
            .arg(&broken)
            .args(["sort", "bubble", "3", "1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid config"));

        folio()
            .arg("--config")
            .arg(temp.path().join("missing.toml"))
            .args(["signal", "sine"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("missing.toml"));
    }
}
