//! Integration tests for the `flight-planner` binary.
//!
//! Each test runs the binary inside a fresh temporary directory, so the
//! default file names resolve there.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const SCENARIO_B: &str =
    "AA|X->M|08:00-09:00,50.00\nBB|M->Y|09:30-11:00,60.00\nCC|M->Y|08:30-10:00,40.00\n";

/// Temporary working directory with an optional catalog.
struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new(catalog: Option<&str>) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        if let Some(text) = catalog {
            fs::write(dir.path().join("flights.txt"), text).expect("write catalog");
        }
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("read report")
    }

    fn run(&self, stdin: &str) -> assert_cmd::assert::Assert {
        let mut cmd = cargo_bin_cmd!("flight-planner");
        cmd.current_dir(self.dir.path())
            .env_remove("FLIGHTS_CATALOG")
            .env_remove("FLIGHTS_DIRECT_OUT")
            .env_remove("FLIGHTS_INDIRECT_OUT")
            .env_remove("RUST_LOG")
            .write_stdin(stdin)
            .assert()
    }

    fn run_with_args(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        let mut cmd = cargo_bin_cmd!("flight-planner");
        cmd.current_dir(self.dir.path())
            .env_remove("FLIGHTS_CATALOG")
            .env_remove("FLIGHTS_DIRECT_OUT")
            .env_remove("FLIGHTS_INDIRECT_OUT")
            .args(args)
            .write_stdin("X->Y\n")
            .assert()
    }
}

#[test]
fn writes_both_reports() {
    let env = TestEnv::new(Some(SCENARIO_B));

    env.run("X->Y\n").success().stdout(predicate::str::is_empty());

    assert_eq!(
        env.read("flights_direct.txt"),
        "M->Y\nBB|09:30-11:00,60.00\nCC|08:30-10:00,40.00\nX->M\nAA|08:00-09:00,50.00\n"
    );
    assert_eq!(
        env.read("flights_indirect.txt"),
        "X->M->Y\nX->M|AA|08:00-09:00,50.00\nM->Y|BB|09:30-11:00,60.00\n"
    );
}

#[test]
fn direct_report_canonical_order() {
    // Scenario A
    let env = TestEnv::new(Some(
        "AA|X->Y|08:00-10:00,100.00\nBB|X->Y|08:00-09:30,150.00\n",
    ));

    env.run("\n").success().stdout(predicate::str::is_empty());

    assert_eq!(
        env.read("flights_direct.txt"),
        "X->Y\nAA|08:00-10:00,100.00\nBB|08:00-09:30,150.00\n"
    );
}

#[test]
fn empty_query_writes_only_direct_report() {
    // Scenario C
    let env = TestEnv::new(Some(SCENARIO_B));

    env.run("").success().stdout(predicate::str::is_empty());

    assert!(env.path("flights_direct.txt").exists());
    assert!(!env.path("flights_indirect.txt").exists());
}

#[test]
fn missing_catalog_prints_file_error() {
    // Scenario D
    let env = TestEnv::new(None);

    env.run("X->Y\n").success().stdout("DAT_GRESKA\n");

    assert!(!env.path("flights_direct.txt").exists());
    assert!(!env.path("flights_indirect.txt").exists());
}

#[test]
fn malformed_catalog_prints_generic_error() {
    let env = TestEnv::new(Some("AA|X->Y|8am-10am,100\n"));

    env.run("X->Y\n").success().stdout("GRESKA\n");

    assert!(!env.path("flights_direct.txt").exists());
}

#[test]
fn malformed_query_prints_generic_error() {
    let env = TestEnv::new(Some(SCENARIO_B));

    env.run("X to Y\n").success().stdout("GRESKA\n");

    assert!(!env.path("flights_direct.txt").exists());
}

#[test]
fn no_connections_writes_empty_report() {
    let env = TestEnv::new(Some(SCENARIO_B));

    env.run("Y->X\n").success().stdout(predicate::str::is_empty());

    assert_eq!(env.read("flights_indirect.txt"), "");
}

#[test]
fn paths_from_arguments() {
    let env = TestEnv::new(None);
    fs::write(env.path("catalog.txt"), SCENARIO_B).expect("write catalog");

    env.run_with_args(&[
        "--catalog",
        "catalog.txt",
        "--direct-out",
        "direct.txt",
        "--indirect-out",
        "indirect.txt",
    ])
    .success()
    .stdout(predicate::str::is_empty());

    assert!(env.read("direct.txt").starts_with("M->Y\n"));
    assert!(env.read("indirect.txt").starts_with("X->M->Y\n"));
}

#[test]
fn paths_from_environment() {
    let env = TestEnv::new(None);
    fs::write(env.path("catalog.txt"), SCENARIO_B).expect("write catalog");

    let mut cmd = cargo_bin_cmd!("flight-planner");
    cmd.current_dir(env.dir.path())
        .env("FLIGHTS_CATALOG", "catalog.txt")
        .env("FLIGHTS_DIRECT_OUT", "direct.txt")
        .env("FLIGHTS_INDIRECT_OUT", "indirect.txt")
        .write_stdin("X->Y\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(env.path("direct.txt").exists());
    assert!(env.path("indirect.txt").exists());
}

#[test]
fn logs_go_to_stderr() {
    let env = TestEnv::new(None);

    let mut cmd = cargo_bin_cmd!("flight-planner");
    cmd.current_dir(env.dir.path())
        .env_remove("FLIGHTS_CATALOG")
        .env("RUST_LOG", "debug")
        .write_stdin("X->Y\n")
        .assert()
        .success()
        .stdout("DAT_GRESKA\n")
        .stderr(predicate::str::contains("run failed"));
}
