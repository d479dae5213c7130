//! Exercises the working-directory entry points. Kept in its own test binary
//! with a single test because it changes the process working directory.

use std::env;
use std::fs;

use closest::{find_by_name, find_by_regex, ClosestError};

#[test]
fn searches_start_at_the_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    let level1 = root.join("level1");
    let level2 = level1.join("level2");
    let level3 = level2.join("level3");
    fs::create_dir_all(&level3).unwrap();
    fs::write(root.join("config.yaml"), "").unwrap();
    fs::write(level1.join("config.yaml"), "").unwrap();
    fs::write(level2.join("test.txt"), "").unwrap();

    let previous = env::current_dir().unwrap();
    env::set_current_dir(&level3).unwrap();

    let nearest = find_by_name("config.yaml", false);
    let all = find_by_name("config.yaml", true);
    let by_regex = find_by_regex(r".*\.txt$", false);
    let missing = find_by_name("closest-missing-7d1f0c2a.txt", false);
    let malformed = find_by_regex("[", false);

    env::set_current_dir(previous).unwrap();

    assert_eq!(nearest.unwrap(), vec![level1.join("config.yaml")]);

    let all: Vec<_> = all
        .unwrap()
        .into_iter()
        .filter(|p| p.starts_with(&root))
        .collect();
    assert_eq!(all, vec![level1.join("config.yaml"), root.join("config.yaml")]);

    assert_eq!(by_regex.unwrap(), vec![level2.join("test.txt")]);
    assert!(matches!(missing, Err(ClosestError::NotFound { .. })));
    assert!(matches!(malformed, Err(ClosestError::InvalidPattern { .. })));
}
