//! Tests for rotation, banners and retention cleanup of the local file.

mod common;

use common::{SharedBuf, at, entry_lines};
use daqlog::{Error, Layout, Logger, ManualClock};
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn logger_at(
    dir: &std::path::Path,
    clock: &Arc<ManualClock>,
    layout: Layout,
    retention_days: u32,
) -> (Logger, SharedBuf) {
    let console = SharedBuf::default();
    let logger = Logger::builder()
        .host("r0")
        .build_id("deadbeef")
        .shared_clock(clock.clone())
        .console(console.clone())
        .file()
        .base_dir(dir)
        .layout(layout)
        .retention_days(retention_days)
        .flush_period(Duration::ZERO)
        .done()
        .build()
        .unwrap();
    (logger, console)
}

#[test]
fn file_is_opened_lazily() {
    let tmp = TempDir::new().unwrap();
    let clock = Arc::new(ManualClock::new(at(2024, 5, 1, 8, 0, 0, 0)));
    let (logger, _) = logger_at(tmp.path(), &clock, Layout::Flat, 0);

    assert!(logger.current_path().is_none());
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);

    logger.message("first").unwrap();
    assert_eq!(
        logger.current_path().unwrap(),
        tmp.path().join("20240501_r0.log")
    );
}

#[test]
fn first_line_is_init_banner() {
    let tmp = TempDir::new().unwrap();
    let clock = Arc::new(ManualClock::new(at(2024, 5, 1, 8, 30, 15, 42)));
    let (logger, _) = logger_at(tmp.path(), &clock, Layout::Flat, 0);

    logger.warning("HV trip on channel 4").unwrap();
    logger.shutdown();

    let content = fs::read_to_string(tmp.path().join("20240501_r0.log")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "2024-05-01 08:30:15.042 [INIT]: logfile initialized: commit deadbeef",
            "2024-05-01 08:30:15.042 [WARNING]: HV trip on channel 4",
        ]
    );
}

#[test]
fn rotates_once_per_day_across_leap_day() {
    let tmp = TempDir::new().unwrap();
    let clock = Arc::new(ManualClock::new(at(2024, 2, 28, 23, 59, 59, 900)));
    let (logger, console) = logger_at(tmp.path(), &clock, Layout::Flat, 0);

    logger.message("a").unwrap();
    logger.message("b").unwrap();
    clock.set(at(2024, 2, 29, 0, 0, 0, 100));
    logger.message("c").unwrap();
    logger.message("d").unwrap();
    clock.set(at(2024, 3, 1, 0, 0, 0, 0));
    logger.message("e").unwrap();
    logger.shutdown();

    let read = |name: &str| fs::read_to_string(tmp.path().join(name)).unwrap();
    let feb28 = read("20240228_r0.log");
    let feb29 = read("20240229_r0.log");
    let mar01 = read("20240301_r0.log");

    // The initial open plus exactly two day-change rotations.
    let banners = [&feb28, &feb29, &mar01]
        .iter()
        .map(|c| c.matches("[INIT]: logfile initialized").count())
        .sum::<usize>();
    assert_eq!(banners, 3);
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 3);

    assert_eq!(entry_lines(&feb28).len(), 2);
    assert_eq!(entry_lines(&feb29).len(), 2);
    assert_eq!(entry_lines(&mar01).len(), 1);
    assert!(feb29.contains("2024-02-29 00:00:00.100 [MESSAGE]: c"));

    assert_eq!(console.lines().len(), 5);
}

#[test]
fn hierarchical_layout_uses_year_and_day_buckets() {
    let tmp = TempDir::new().unwrap();
    let clock = Arc::new(ManualClock::new(at(2025, 7, 4, 12, 0, 0, 0)));
    let (logger, _) = logger_at(tmp.path(), &clock, Layout::Hierarchical, 0);

    logger.message("independence").unwrap();
    clock.set(at(2025, 7, 5, 0, 0, 1, 0));
    logger.message("next day").unwrap();
    logger.shutdown();

    let first = tmp.path().join("2025").join("07.04").join("r0.log");
    let second = tmp.path().join("2025").join("07.05").join("r0.log");
    assert!(fs::read_to_string(first).unwrap().contains("independence"));
    assert!(fs::read_to_string(second).unwrap().contains("next day"));
}

#[test]
fn rotation_deletes_expired_file() {
    let tmp = TempDir::new().unwrap();
    let expired = tmp.path().join("20240226_r0.log");
    fs::write(&expired, "old\n").unwrap();
    let keep = tmp.path().join("20240227_r0.log");
    fs::write(&keep, "newer\n").unwrap();

    let clock = Arc::new(ManualClock::new(at(2024, 3, 2, 0, 0, 0, 0)));
    let (logger, _) = logger_at(tmp.path(), &clock, Layout::Flat, 5);
    logger.message("run start").unwrap();
    logger.shutdown();

    assert!(!expired.exists());
    assert!(keep.exists());

    let content = fs::read_to_string(tmp.path().join("20240302_r0.log")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert!(lines[0].contains("[INIT]: logfile initialized"));
    assert!(lines[1].contains("[INIT]: deleted"));
    assert!(lines[1].contains("20240226_r0.log"));
    assert!(lines[2].ends_with("[MESSAGE]: run start"));
}

#[test]
fn rotation_records_nothing_to_delete() {
    let tmp = TempDir::new().unwrap();
    let clock = Arc::new(ManualClock::new(at(2024, 3, 2, 0, 0, 0, 0)));
    let (logger, _) = logger_at(tmp.path(), &clock, Layout::Flat, 5);

    logger.message("run start").unwrap();
    logger.shutdown();

    let content = fs::read_to_string(tmp.path().join("20240302_r0.log")).unwrap();
    assert!(content.lines().nth(1).unwrap().ends_with("[INIT]: nothing to delete"));
}

#[test]
fn retention_disabled_writes_no_cleanup_line() {
    let tmp = TempDir::new().unwrap();
    let clock = Arc::new(ManualClock::new(at(2024, 3, 2, 0, 0, 0, 0)));
    let (logger, _) = logger_at(tmp.path(), &clock, Layout::Flat, 0);

    logger.message("x").unwrap();
    logger.shutdown();

    let content = fs::read_to_string(tmp.path().join("20240302_r0.log")).unwrap();
    assert_eq!(content.matches("[INIT]").count(), 1);
}

#[test]
fn hierarchical_retention_deletes_bucket_file() {
    let tmp = TempDir::new().unwrap();
    let old_dir = tmp.path().join("2025").join("07.01");
    fs::create_dir_all(&old_dir).unwrap();
    fs::write(old_dir.join("r0.log"), "old\n").unwrap();

    let clock = Arc::new(ManualClock::new(at(2025, 7, 4, 0, 0, 0, 0)));
    let (logger, _) = logger_at(tmp.path(), &clock, Layout::Hierarchical, 3);
    logger.message("x").unwrap();
    logger.shutdown();

    assert!(!old_dir.join("r0.log").exists());
}

#[test]
fn unopenable_directory_fails_entry_but_keeps_console() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("not_a_dir");
    fs::write(&blocker, "").unwrap();

    let clock = Arc::new(ManualClock::new(at(2024, 6, 1, 0, 0, 0, 0)));
    let (logger, console) = logger_at(&blocker, &clock, Layout::Hierarchical, 0);

    let err = logger.message("lost locally").unwrap_err();
    assert!(matches!(err, Error::CreateDir { .. }));
    assert!(logger.current_path().is_none());
    assert_eq!(console.lines().len(), 1);
    assert!(console.contents().contains("lost locally"));
}

#[test]
fn unopenable_file_fails_entry() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("not_a_dir");
    fs::write(&blocker, "").unwrap();

    let clock = Arc::new(ManualClock::new(at(2024, 6, 1, 0, 0, 0, 0)));
    let (logger, _) = logger_at(&blocker, &clock, Layout::Flat, 0);

    let err = logger.message("lost").unwrap_err();
    assert!(matches!(err, Error::OpenFile { .. }));
}

#[test]
fn failed_rotation_is_retried_on_next_entry() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("logs");
    fs::write(&root, "").unwrap();

    let clock = Arc::new(ManualClock::new(at(2024, 6, 1, 0, 0, 0, 0)));
    let (logger, _) = logger_at(&root, &clock, Layout::Flat, 0);

    assert!(logger.message("first").is_err());

    fs::remove_file(&root).unwrap();
    fs::create_dir(&root).unwrap();
    logger.message("second").unwrap();
    logger.shutdown();

    let content = fs::read_to_string(root.join("20240601_r0.log")).unwrap();
    assert_eq!(entry_lines(&content), vec!["2024-06-01 00:00:00.000 [MESSAGE]: second"]);
}

#[test]
fn explicit_rotation_appends_to_same_day_file() {
    let tmp = TempDir::new().unwrap();
    let clock = Arc::new(ManualClock::new(at(2024, 6, 1, 9, 0, 0, 0)));
    let (logger, _) = logger_at(tmp.path(), &clock, Layout::Flat, 0);

    logger.message("before").unwrap();
    logger.rotate().unwrap();
    logger.message("after").unwrap();
    logger.shutdown();

    let content = fs::read_to_string(tmp.path().join("20240601_r0.log")).unwrap();
    assert_eq!(content.matches("logfile initialized").count(), 2);
    assert_eq!(entry_lines(&content).len(), 2);
}

#[test]
fn undeletable_expired_path_is_recorded_not_fatal() {
    let tmp = TempDir::new().unwrap();
    let blocked = tmp.path().join("20240226_r0.log");
    fs::create_dir(&blocked).unwrap();
    fs::write(blocked.join("keep"), "x").unwrap();

    let clock = Arc::new(ManualClock::new(at(2024, 3, 2, 0, 0, 0, 0)));
    let (logger, _) = logger_at(tmp.path(), &clock, Layout::Flat, 5);
    logger.message("run start").unwrap();
    logger.shutdown();

    assert!(blocked.exists());
    let content = fs::read_to_string(tmp.path().join("20240302_r0.log")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert!(lines[1].contains("[INIT]: could not delete"));
    assert!(lines[1].contains("20240226_r0.log"));
    assert!(lines[2].ends_with("[MESSAGE]: run start"));
}
