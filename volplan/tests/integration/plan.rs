// vim: tw=80
use assert_cmd::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

use super::{inventory, volplan};

const FIVE_DEVICES: &str = "\
devices:
  - path: /dev/sda
    size: 10737418240
  - path: /dev/sdb
    size: 10737418240
  - path: /dev/sdc
    size: 10737418240
  - path: /dev/sdd
    size: 10737418240
  - path: /dev/sde
    size: 10737418240
db_devices: []
wal_devices: []
";

#[test]
fn help() {
    volplan().arg("-h").assert().success();
}

#[rstest]
#[case("json")]
#[case("json-pretty")]
fn json_report(#[case] format: &str) {
    let (path, _tempdir) = inventory(FIVE_DEVICES);
    let output = volplan()
        .arg("--inventory")
        .arg(&path)
        .args(["--format", format])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value =
        serde_json::from_slice(&output).unwrap();
    let units = v.as_array().unwrap();
    assert_eq!(units.len(), 5);
    assert_eq!(units[0]["data"]["path"], "/dev/sda");
    assert_eq!(units[0]["data"]["size"],
        serde_json::json!(10737418240u64));
    assert_eq!(units[4]["data"]["path"], "/dev/sde");
    assert!(units[0].get("block_db").is_none());
}

/// An empty inventory still yields valid JSON: an empty list.
#[rstest]
#[case("json")]
#[case("json-pretty")]
fn json_report_valid_empty(#[case] format: &str) {
    let (path, _tempdir) = inventory(
        "devices: []\ndb_devices: []\nwal_devices: []\n",
    );
    let output = volplan()
        .arg("--inventory")
        .arg(&path)
        .args(["--format", format])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value =
        serde_json::from_slice(&output).unwrap();
    assert_eq!(v, serde_json::json!([]));
}

/// A fast pool whose only device is unusable must not break the report.
#[test]
fn json_report_valid_unavailable_fast() {
    let (path, _tempdir) = inventory("\
devices:
  - path: /dev/sda
    size: 10737418240
db_devices:
  - path: /dev/nvme0n1
    size: 10737418240
    usable_for_metadata: false
wal_devices: []
");
    let output = volplan()
        .arg("--inventory")
        .arg(&path)
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value =
        serde_json::from_slice(&output).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 1);
    assert!(v[0].get("block_db").is_none());
}

#[test]
fn overlapping_pools() {
    let (path, _tempdir) = inventory("\
devices:
  - path: /dev/sda
    size: 10737418240
db_devices:
  - path: /dev/sda
    size: 10737418240
wal_devices: []
");
    volplan()
        .arg("--inventory")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Device lists are not disjoint: /dev/sda",
        ));
}

#[test]
fn pretty_report() {
    let (path, _tempdir) = inventory(FIVE_DEVICES);
    volplan()
        .arg("--inventory")
        .arg(&path)
        .args(["--dmcrypt", "--fsid", "asdf-lkjh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total OSDs: 5"))
        .stdout(predicate::str::contains("Cluster fsid: asdf-lkjh"))
        .stdout(predicate::str::contains("Encryption: dmcrypt"))
        .stdout(predicate::str::contains("/dev/sdc"));
}

/// A device that already hosts one of two block_db slots absorbs only one
/// new volume; the uncovered unit is reported, not failed.
#[test]
fn converging_fast_allocation() {
    let (path, _tempdir) = inventory("\
devices:
  - path: /dev/sda
    size: 10737418240
  - path: /dev/sdb
    size: 10737418240
db_devices:
  - path: /dev/nvme0n1
    size: 10737418240
    lvs: [ceph-db-0]
wal_devices: []
");
    let output = volplan()
        .arg("--inventory")
        .arg(&path)
        .args(["--db-slots", "2", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value =
        serde_json::from_slice(&output).unwrap();
    let units = v.as_array().unwrap();
    assert_eq!(units.len(), 2);
    assert_eq!(units[0]["block_db"]["path"], "/dev/nvme0n1");
    assert!(units[1].get("block_db").is_none());
}

#[test]
fn osd_ids_cap_the_plan() {
    let (path, _tempdir) = inventory(FIVE_DEVICES);
    let output = volplan()
        .arg("--inventory")
        .arg(&path)
        .args(["--osd-ids", "7,9", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value =
        serde_json::from_slice(&output).unwrap();
    let units = v.as_array().unwrap();
    assert_eq!(units.len(), 2);
    assert_eq!(units[0]["osd_id"], serde_json::json!(7));
    assert_eq!(units[1]["osd_id"], serde_json::json!(9));
}

#[test]
fn missing_inventory_file() {
    volplan()
        .args(["--inventory", "/nonexistent/inventory.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read"));
}
