//! A deleted working directory cannot be resolved. Kept in its own test
//! binary because it leaves the process without a working directory.

#![cfg(unix)]

use std::env;
use std::fs;

use closest::{find_by_name, ClosestError};

#[test]
fn deleted_working_directory_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let gone = dir.path().join("gone");
    fs::create_dir(&gone).unwrap();

    let previous = env::current_dir().unwrap();
    env::set_current_dir(&gone).unwrap();
    fs::remove_dir(&gone).unwrap();

    let outcome = find_by_name("config.yaml", false);

    env::set_current_dir(previous).unwrap();

    assert!(matches!(outcome, Err(ClosestError::NoWorkingDirectory(_))));
}
