#![allow(clippy::unwrap_used)]

use super::*;
use std::collections::HashMap;

fn settings(vars: &[(&str, &str)]) -> Result<Settings> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn test_defaults() {
    let s = settings(&[]).unwrap();
    assert_eq!(s.timezone, chrono_tz::Asia::Dhaka);
    assert!(s.db_path.ends_with("smsledger.db"));
}

#[test]
fn test_timezone_override() {
    let s = settings(&[(TIMEZONE_VAR, "Europe/London")]).unwrap();
    assert_eq!(s.timezone, chrono_tz::Europe::London);
}

#[test]
fn test_blank_timezone_uses_default() {
    let s = settings(&[(TIMEZONE_VAR, "  ")]).unwrap();
    assert_eq!(s.timezone, chrono_tz::Asia::Dhaka);
}

#[test]
fn test_invalid_timezone_is_error() {
    let err = settings(&[(TIMEZONE_VAR, "Mars/Olympus")]).unwrap_err();
    assert!(format!("{err:#}").contains(TIMEZONE_VAR));
}

#[test]
fn test_db_path_override() {
    let s = settings(&[(DB_VAR, "/tmp/ledger.db")]).unwrap();
    assert_eq!(s.db_path, PathBuf::from("/tmp/ledger.db"));
}

#[test]
fn test_expand_home() {
    assert_eq!(expand_home("/abs/path.db"), "/abs/path.db");
    assert!(!expand_home("~/ledger.db").starts_with('~'));
    assert!(expand_home("~/ledger.db").ends_with("/ledger.db"));
}
