use std::io::Write;

use serial_test::serial;
use tablestakes_cli::{exit_code, run};

const VARS: &[&str] = &[
    "TABLESTAKES_CONFIG",
    "TABLESTAKES_SEED",
    "TABLESTAKES_BIG_BLIND",
    "TABLESTAKES_STARTING_STACK",
    "TABLESTAKES_PLAYERS",
    "TABLESTAKES_OPPONENT",
];

fn clear_env() {
    for var in VARS {
        unsafe { std::env::remove_var(var) };
    }
}

fn set_env(var: &str, value: &str) {
    unsafe { std::env::set_var(var, value) };
}

fn cfg() -> (i32, serde_json::Value, String) {
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let code = run(["tablestakes", "cfg"], &mut out, &mut err);
    let json = serde_json::from_slice(&out).unwrap_or(serde_json::Value::Null);
    (code, json, String::from_utf8(err).unwrap())
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn defaults_when_nothing_is_set() {
    clear_env();
    let (code, json, _) = cfg();
    assert_eq!(code, exit_code::SUCCESS);
    assert_eq!(json["starting_stack"]["value"], 1000);
    assert_eq!(json["big_blind"]["value"], 20);
    assert_eq!(json["players"]["value"], 4);
    assert_eq!(json["opponent"]["value"], "heuristic");
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["seed"]["source"], "default");
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let file = config_file("players = 6\nseed = 9\nbig_blind = 40\n");
    set_env("TABLESTAKES_CONFIG", file.path().to_str().unwrap());
    set_env("TABLESTAKES_BIG_BLIND", "50");

    let (code, json, _) = cfg();
    clear_env();

    assert_eq!(code, exit_code::SUCCESS);
    assert_eq!(json["players"]["value"], 6);
    assert_eq!(json["players"]["source"], "file");
    assert_eq!(json["seed"]["value"], 9);
    assert_eq!(json["big_blind"]["value"], 50);
    assert_eq!(json["big_blind"]["source"], "env");
    assert_eq!(json["starting_stack"]["source"], "default");
}

#[test]
#[serial]
fn flags_override_env() {
    clear_env();
    set_env("TABLESTAKES_BIG_BLIND", "50");
    set_env("TABLESTAKES_OPPONENT", "fold");

    let (mut out, mut err) = (Vec::new(), Vec::new());
    let code = run(
        [
            "tablestakes", "sim", "--hands", "3", "--players", "2", "--seed", "4", "--big-blind",
            "30", "--json",
        ],
        &mut out,
        &mut err,
    );
    clear_env();

    assert_eq!(code, exit_code::SUCCESS);
    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["big_blind"], 30);
    assert_eq!(report["opponent"], "fold");
}

#[test]
#[serial]
fn invalid_env_value_is_reported() {
    clear_env();
    set_env("TABLESTAKES_PLAYERS", "1");
    let (code, _, err) = cfg();
    set_env("TABLESTAKES_PLAYERS", "many");
    let (code_unparsed, _, err_unparsed) = cfg();
    clear_env();

    assert_eq!(code, exit_code::ERROR);
    assert!(err.contains("players must be 2..=10"));
    assert_eq!(code_unparsed, exit_code::ERROR);
    assert!(err_unparsed.contains("TABLESTAKES_PLAYERS"));
}

#[test]
#[serial]
fn unknown_file_keys_are_rejected() {
    clear_env();
    let file = config_file("level = 3\n");
    set_env("TABLESTAKES_CONFIG", file.path().to_str().unwrap());
    let (code, _, err) = cfg();
    clear_env();

    assert_eq!(code, exit_code::ERROR);
    assert!(err.contains("cannot parse config file"));
}

#[test]
#[serial]
fn missing_config_file_is_an_error() {
    clear_env();
    set_env("TABLESTAKES_CONFIG", "/nonexistent/tablestakes.toml");
    let (code, _, err) = cfg();
    clear_env();

    assert_eq!(code, exit_code::ERROR);
    assert!(err.contains("cannot read config file"));
}
