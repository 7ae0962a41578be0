//! Block/unblock patching of a managed file.

mod common;

use hostblock::domain::Domain;
use hostblock::entry::BlockEntry;
use hostblock::hostnames::HostnameSource;
use hostblock::linefile::{LineFile, LineFileError};
use hostblock::patcher::HostsPatcher;
use std::fs;
use std::path::Path;

/// Patcher over <dir>/hosts with no blocklist file, so the given
/// defaults are the working set.
fn patcher_for(dir: &Path, defaults: &[&str]) -> HostsPatcher {
    HostsPatcher::new(
        LineFile::new(dir.join("hosts")),
        BlockEntry::new("127.0.0.1"),
        HostnameSource::new(
            dir.join("blocklist"),
            defaults.iter().map(|name| Domain::new(*name)).collect(),
        ),
    )
}

#[test]
fn block_on_empty_file_writes_expanded_entries() {
    let dir = common::temp_home();
    let hosts = dir.path().join("hosts");
    fs::write(&hosts, "").unwrap();

    let patcher = patcher_for(dir.path(), &["heise.de"]);
    let count = patcher.block().unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        fs::read_to_string(&hosts).unwrap(),
        "127.0.0.1 heise.de\n127.0.0.1 www.heise.de\n"
    );
}

#[test]
fn block_creates_missing_hosts_file() {
    let dir = common::temp_home();
    let hosts = dir.path().join("hosts");

    let patcher = patcher_for(dir.path(), &["heise.de"]);
    patcher.block().unwrap();

    assert!(hosts.is_file());
    assert_eq!(
        fs::read_to_string(&hosts).unwrap(),
        "127.0.0.1 heise.de\n127.0.0.1 www.heise.de\n"
    );
}

#[test]
fn blocking_twice_doubles_the_entries() {
    let dir = common::temp_home();
    let hosts = dir.path().join("hosts");
    fs::write(&hosts, "").unwrap();

    let patcher = patcher_for(dir.path(), &["heise.de"]);
    patcher.block().unwrap();
    patcher.block().unwrap();

    let content = fs::read_to_string(&hosts).unwrap();
    assert_eq!(content.lines().count(), 4);
    assert_eq!(content.matches("127.0.0.1 heise.de").count(), 2);
}

#[test]
fn block_keeps_existing_lines() {
    let dir = common::temp_home();
    let hosts = dir.path().join("hosts");
    fs::write(&hosts, "127.0.0.1 localhost\n").unwrap();

    let patcher = patcher_for(dir.path(), &["heise.de"]);
    patcher.block().unwrap();

    let content = fs::read_to_string(&hosts).unwrap();
    assert!(content.starts_with("127.0.0.1 localhost\n"));
    assert!(content.contains("127.0.0.1 www.heise.de"));
}

#[test]
fn unblock_removes_matching_lines_only() {
    let dir = common::temp_home();
    let hosts = dir.path().join("hosts");
    fs::write(&hosts, "127.0.0.1 heise.de\n10.0.0.1 other.com\n").unwrap();

    let patcher = patcher_for(dir.path(), &["heise.de"]);
    patcher.unblock().unwrap();

    assert_eq!(fs::read_to_string(&hosts).unwrap(), "10.0.0.1 other.com\n");
}

#[test]
fn unblock_matches_by_substring() {
    let dir = common::temp_home();
    let hosts = dir.path().join("hosts");
    fs::write(&hosts, "# heise.de added by hand\n10.0.0.1 other.com\n").unwrap();

    let patcher = patcher_for(dir.path(), &["heise.de"]);
    patcher.unblock().unwrap();

    // Whole-line substring matching: the comment goes too.
    assert_eq!(fs::read_to_string(&hosts).unwrap(), "10.0.0.1 other.com\n");
}

#[test]
fn unblock_without_matches_keeps_lines() {
    let dir = common::temp_home();
    let hosts = dir.path().join("hosts");
    fs::write(&hosts, "127.0.0.1 localhost\n10.0.0.1 other.com\n").unwrap();

    let patcher = patcher_for(dir.path(), &["heise.de"]);
    patcher.unblock().unwrap();

    assert_eq!(
        fs::read_to_string(&hosts).unwrap(),
        "127.0.0.1 localhost\n10.0.0.1 other.com\n"
    );
}

#[test]
fn unblock_on_missing_file_surfaces_not_found() {
    let dir = common::temp_home();
    let patcher = patcher_for(dir.path(), &["heise.de"]);
    assert!(matches!(
        patcher.unblock(),
        Err(LineFileError::NotFound(_))
    ));
}

#[test]
fn block_then_unblock_roundtrip_is_empty() {
    let dir = common::temp_home();
    let hosts = dir.path().join("hosts");
    fs::write(&hosts, "").unwrap();

    let patcher = patcher_for(dir.path(), &["heise.de", "spon.de"]);
    patcher.block().unwrap();
    patcher.unblock().unwrap();

    assert_eq!(fs::read_to_string(&hosts).unwrap(), "");
}

#[test]
fn print_returns_raw_content() {
    let dir = common::temp_home();
    let hosts = dir.path().join("hosts");
    fs::write(&hosts, "127.0.0.1 localhost\n").unwrap();

    let patcher = patcher_for(dir.path(), &["heise.de"]);
    assert_eq!(patcher.print().unwrap(), "127.0.0.1 localhost\n");
}

#[test]
fn blocklist_file_overrides_defaults_in_patching() {
    let dir = common::temp_home();
    let hosts = dir.path().join("hosts");
    fs::write(&hosts, "").unwrap();
    fs::write(dir.path().join("blocklist"), "foo.com\n").unwrap();

    let patcher = patcher_for(dir.path(), &["heise.de"]);
    patcher.block().unwrap();

    assert_eq!(
        fs::read_to_string(&hosts).unwrap(),
        "127.0.0.1 foo.com\n127.0.0.1 www.foo.com\n"
    );
}
