//! Integration tests for aoc

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const EXAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    /// Isolated cache and workspace with plain output
    struct Env {
        cache: TempDir,
        workspace: TempDir,
    }

    impl Env {
        fn new() -> Self {
            Self {
                cache: TempDir::new().unwrap(),
                workspace: TempDir::new().unwrap(),
            }
        }

        fn aoc(&self) -> Command {
            let mut cmd = cargo_bin_cmd!("aoc");
            cmd.env("AOC_CACHE", self.cache.path())
                .env("AOC_WORKSPACE", self.workspace.path())
                .env("AOC_PLAIN", "1")
                .env_remove("AOC_SESSION");
            cmd
        }

        fn input(&self, name: &str, contents: &str) {
            let dir = self.workspace.path().join("2024/input/day1");
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(name), contents).unwrap();
        }

        fn entry(&self) -> std::path::PathBuf {
            self.cache.path().join("puzzles/2024-day1-part1-input")
        }
    }

    fn run_day1(env: &Env) -> assert_cmd::assert::Assert {
        env.aoc()
            .args(["run", "-y", "2024", "-d", "1", "-p", "1"])
            .assert()
    }

    #[test]
    fn help_displays() {
        cargo_bin_cmd!("aoc")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("re-verify puzzle solutions"))
            .stdout(predicate::str::contains("__runner").not());
    }

    #[test]
    fn version_displays() {
        cargo_bin_cmd!("aoc")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("aoc"));
    }

    #[test]
    fn run_records_result() {
        let env = Env::new();
        env.input("input.txt", EXAMPLE);

        run_day1(&env)
            .success()
            .stdout(predicate::str::contains("Running 2024/day1/part1 with input.txt"))
            .stdout(predicate::str::contains("Res: 11"));

        let entry = env.entry();
        assert!(entry.join("runner").is_file());
        assert_eq!(fs::read_to_string(entry.join("lock")).unwrap(), "false");
        assert_eq!(fs::read_to_string(entry.join("res")).unwrap(), "11");
        assert!(fs::read_to_string(entry.join("dur")).unwrap().ends_with("ns"));
    }

    #[test]
    fn run_without_input_creates_nothing() {
        let env = Env::new();

        env.aoc()
            .args(["run", "-y", "2024", "-d", "1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("does not exist"));
        assert!(!env.cache.path().join("puzzles").exists());
    }

    #[test]
    fn run_unknown_solution_fails() {
        let env = Env::new();
        let dir = env.workspace.path().join("2024/input/day25");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("input.txt"), "x").unwrap();

        env.aoc()
            .args(["run", "-y", "2024", "-d", "25"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("2024/day25/part1 does not exist"));
    }

    #[test]
    fn bad_part_is_rejected() {
        let env = Env::new();
        env.aoc()
            .args(["run", "-y", "2024", "-d", "1", "-p", "3"])
            .assert()
            .failure();
    }

    #[test]
    fn status_without_record() {
        let env = Env::new();
        env.aoc()
            .args(["status", "-y", "2024", "-d", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "No record of running 2024/day1/part1 with input.txt",
            ));
        assert!(!env.cache.path().join("puzzles").exists());
    }

    #[test]
    fn lock_then_status_shows_locked() {
        let env = Env::new();
        env.input("input.txt", EXAMPLE);
        run_day1(&env).success();

        env.aoc()
            .args(["lock", "-y", "2024", "-d", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Locked"));

        env.aoc()
            .args(["status", "-y", "2024", "-d", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("▣ Locked"))
            .stdout(predicate::str::contains("Lock res: 11"));

        env.aoc()
            .args(["status", "-y", "2024", "-d", "1", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"locked\": true"));

        env.aoc()
            .args(["unlock", "-y", "2024", "-d", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("□ Unlocked"));
    }

    #[test]
    fn locked_regression_fails_run() {
        let env = Env::new();
        env.input("input.txt", EXAMPLE);
        run_day1(&env).success();
        env.aoc()
            .args(["lock", "-y", "2024", "-d", "1"])
            .assert()
            .success();

        env.input("input.txt", "1   1\n");
        run_day1(&env)
            .failure()
            .stdout(predicate::str::contains("Error: res: 0, want 11"))
            .stderr(predicate::str::contains("Regression"));

        // The locked result survives
        assert_eq!(fs::read_to_string(env.entry().join("res")).unwrap(), "11");
    }

    #[test]
    fn check_passes_then_fails_on_changed_input() {
        let env = Env::new();
        env.input("input.txt", EXAMPLE);
        run_day1(&env).success();
        env.aoc()
            .args(["lock", "-y", "2024", "-d", "1"])
            .assert()
            .success();

        env.aoc()
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("2024/day1/part1 (input)"));

        env.input("input.txt", "1   1\n");
        env.aoc()
            .args(["check", "--jobs", "1"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("res: 0, want 11"))
            .stderr(predicate::str::contains("1 of 1 locked puzzles did not verify"));
    }

    #[test]
    fn check_with_nothing_locked() {
        let env = Env::new();
        env.input("input.txt", EXAMPLE);
        run_day1(&env).success();

        env.aoc()
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("No locked puzzles"));
    }

    #[test]
    fn cache_clear_with_yes() {
        let env = Env::new();
        env.input("input.txt", EXAMPLE);
        run_day1(&env).success();
        assert!(env.entry().exists());

        env.aoc()
            .args(["cache", "clear", "--yes"])
            .assert()
            .success();
        assert!(!env.entry().exists());
    }

    #[test]
    fn init_scaffolds_day_and_keeps_existing_files() {
        let env = Env::new();
        let source = TempDir::new().unwrap();
        env.input("input.txt", EXAMPLE);
        let source_arg = source.path().to_str().unwrap();

        env.aoc()
            .args(["init", "-y", "2024", "-d", "1", "--source", source_arg])
            .assert()
            .success()
            .stdout(predicate::str::contains("Skipping"))
            .stdout(predicate::str::contains("day01.rs"));

        let day = env.workspace.path().join("2024/input/day1");
        assert_eq!(fs::read_to_string(day.join("input.txt")).unwrap(), EXAMPLE);
        assert_eq!(fs::read_to_string(day.join("test.txt")).unwrap(), "");
        assert!(source.path().join("src/solutions/year2024/day01.rs").exists());
    }

    #[test]
    fn submit_requires_login() {
        let env = Env::new();
        env.input("input.txt", EXAMPLE);
        run_day1(&env).success();

        env.aoc()
            .args(["submit", "--yes"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Not logged in"));
    }

    #[test]
    fn hidden_runner_rejects_missing_manifest() {
        let env = Env::new();
        let missing = env.cache.path().join("nope/runner");
        env.aoc()
            .arg("__runner")
            .arg(&missing)
            .assert()
            .failure();
    }

    #[test]
    fn hidden_runner_executes_cached_manifest() {
        let env = Env::new();
        env.input("input.txt", EXAMPLE);
        run_day1(&env).success();

        let runner = env.entry().join("runner");
        assert!(Path::new(&runner).is_file());
        cargo_bin_cmd!("aoc")
            .arg("__runner")
            .arg(&runner)
            .assert()
            .success()
            .stdout(predicate::str::contains("Res: 11"));
    }

    #[test]
    fn completions_generate() {
        cargo_bin_cmd!("aoc")
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("aoc"));
    }
}
