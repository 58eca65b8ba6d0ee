// vim: tw=80
use std::{fs, path::PathBuf, process::Command};

use assert_cmd::prelude::*;
use tempfile::TempDir;

mod plan;

pub fn volplan() -> Command {
    Command::cargo_bin("volplan").unwrap()
}

/// Write an inventory file into a fresh tempdir and return its path.
pub fn inventory(yaml: &str) -> (PathBuf, TempDir) {
    let tempdir = tempfile::Builder::new()
        .prefix(concat!(module_path!(), "."))
        .tempdir()
        .unwrap();
    let path = tempdir.path().join("inventory.yaml");
    fs::write(&path, yaml).unwrap();
    (path, tempdir)
}
