//! End-to-end integration test for the distribution flow
//!
//! Exercises the complete path: master payload fan-out through the
//! synchronizer, registry parsing of the distributed copies, and the
//! operator-facing binary with its confirmation gate.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use setlist_registry::foil_mapping_from;
use setlist_sync::{MASTER_NAME, SetListReplacer};

const MASTER_PAYLOAD: &str = "Alpha\nAlpha Foil\nBeta\n\n";

/// Set up a working directory with a master list and a scan tree holding
/// stale duplicates, one of them inside an excluded asset cache.
fn setup() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(MASTER_NAME), MASTER_PAYLOAD).unwrap();

    for rel in ["tree/a", "tree/a/cardCrops", "tree/b"] {
        let sub = dir.path().join(rel);
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("setList.txt"), "stale\n").unwrap();
    }

    dir
}

fn setlist(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("setlist").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn test_distributed_copies_parse_back_into_the_same_mapping() {
    let dir = setup();

    // Fan the master out through the library API
    let mut replacer = SetListReplacer::with_default_exclusions();
    replacer.load_master_from(dir.path()).unwrap();
    replacer.discover(&dir.path().join("tree")).unwrap();
    replacer.apply_replacements().unwrap();

    // Every replaced copy is a valid registry yielding the master's mapping
    for rel in ["tree/a", "tree/b"] {
        let mapping = foil_mapping_from(&dir.path().join(rel)).unwrap();
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping["Alpha"], "Alpha Foil");
        assert_eq!(mapping["Beta"], "");
        assert_eq!(mapping[""], "");
    }

    // The excluded cache copy still holds its pre-run bytes
    assert_eq!(
        fs::read_to_string(dir.path().join("tree/a/cardCrops/setList.txt")).unwrap(),
        "stale\n"
    );
}

#[test]
fn test_binary_reports_discoveries_in_deterministic_order() {
    let dir = setup();

    setlist(dir.path())
        .args(["distribute", "tree", "--dry-run"])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(r"(?s) -> .*tree/a/setList\.txt\n.* -> .*tree/b/setList\.txt")
                .unwrap(),
        )
        .stdout(predicate::str::contains("cardCrops").not());
}

#[test]
fn test_binary_decline_leaves_every_file_byte_identical() {
    let dir = setup();

    setlist(dir.path())
        .args(["distribute", "tree"])
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborting replacement, no changes made"));

    for rel in ["tree/a", "tree/a/cardCrops", "tree/b"] {
        assert_eq!(
            fs::read(dir.path().join(rel).join("setList.txt")).unwrap(),
            b"stale\n"
        );
    }
}

#[test]
fn test_binary_confirmation_fans_out_master_bytes() {
    let dir = setup();

    setlist(dir.path())
        .args(["distribute", "tree"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Replacements completed"));

    for rel in ["tree/a", "tree/b"] {
        assert_eq!(
            fs::read(dir.path().join(rel).join("setList.txt")).unwrap(),
            MASTER_PAYLOAD.as_bytes()
        );
    }
}

#[test]
fn test_binary_empty_tree_succeeds_without_prompting() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(MASTER_NAME), MASTER_PAYLOAD).unwrap();
    fs::create_dir_all(dir.path().join("tree")).unwrap();

    setlist(dir.path())
        .args(["distribute", "tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No setList.txt files found"));
}
