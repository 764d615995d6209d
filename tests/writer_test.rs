//! Concurrency tests for LogWriter and the lock registry.

use std::fs;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use daylog::lock::{LockKey, LockRegistry, Strategy};
use daylog::{log_to, DateOrder, DisplayFlag, DisplayFlags, LogWriter, TimestampConfig};
use tempfile::TempDir;

const THREADS: usize = 8;
const RECORDS: usize = 200;

fn stamp() -> TimestampConfig {
    TimestampConfig::new(DateOrder::YearMonthDay, DisplayFlags::empty())
        .with_flag(DisplayFlag::HideWeekday, true)
}

fn read_all_lines(dir: &std::path::Path) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in fs::read_dir(dir).unwrap() {
        let content = fs::read_to_string(entry.unwrap().path()).unwrap();
        lines.extend(content.lines().map(str::to_string));
    }
    lines
}

#[test]
fn concurrent_logs_never_interleave() {
    let temp = TempDir::new().unwrap();
    let writer = Arc::new(
        LogWriter::builder(&temp.path().to_string_lossy())
            .stamp(stamp())
            .registry(Arc::new(LockRegistry::new()))
            .build()
            .unwrap(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let writer = Arc::clone(&writer);
            thread::spawn(move || {
                for i in 0..RECORDS {
                    log_to!(writer, "thread", t, "record", i, "payload-payload-payload").unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = read_all_lines(temp.path());
    assert_eq!(lines.len(), THREADS * RECORDS);
    for line in &lines {
        assert!(line.starts_with('['), "malformed line: {line}");
        let (_, body) = line.split_once("] ").unwrap();
        let fields: Vec<_> = body.split(' ').collect();
        assert_eq!(fields.len(), 5, "malformed line: {line}");
        assert_eq!(fields[0], "thread");
        assert_eq!(fields[2], "record");
        assert_eq!(fields[4], "payload-payload-payload");
    }
}

#[test]
fn writers_sharing_a_key_share_one_lock() {
    let temp = TempDir::new().unwrap();
    let registry = Arc::new(LockRegistry::new());
    let dir = temp.path().to_string_lossy().into_owned();

    let writers: Vec<_> = (0..THREADS)
        .map(|_| {
            Arc::new(
                LogWriter::builder(&dir)
                    .stamp(stamp())
                    .registry(Arc::clone(&registry))
                    .key(LockKey::id(1))
                    .build()
                    .unwrap(),
            )
        })
        .collect();

    let handles: Vec<_> = writers
        .into_iter()
        .enumerate()
        .map(|(t, writer)| {
            thread::spawn(move || {
                for i in 0..RECORDS / 4 {
                    log_to!(writer, t, i).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = read_all_lines(temp.path());
    assert_eq!(lines.len(), THREADS * (RECORDS / 4));
    assert!(lines.iter().all(|l| l.split(' ').count() == 3));
}

#[test]
fn distinct_keys_do_not_block_each_other() {
    let registry = Arc::new(LockRegistry::new());
    let held = registry.blocking(LockKey::id(1)).unwrap();

    let other = Arc::clone(&registry);
    let acquired = thread::spawn(move || other.blocking(LockKey::id(2)).is_ok())
        .join()
        .unwrap();
    assert!(acquired);

    let other = Arc::clone(&registry);
    let contended = thread::spawn(move || {
        other
            .try_acquire(LockKey::id(1), Strategy::Blocking)
            .unwrap()
            .is_none()
    })
    .join()
    .unwrap();
    assert!(contended);
    drop(held);
}

#[test]
fn spin_lock_excludes_other_threads() {
    let registry = Arc::new(LockRegistry::new());
    let inside = Arc::new(AtomicBool::new(false));
    let entered = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let inside = Arc::clone(&inside);
            let entered = Arc::clone(&entered);
            thread::spawn(move || {
                for _ in 0..50 {
                    let _guard = registry.spin(LockKey::id(9));
                    assert!(!inside.swap(true, Ordering::SeqCst));
                    entered.fetch_add(1, Ordering::SeqCst);
                    thread::sleep(Duration::from_micros(10));
                    inside.store(false, Ordering::SeqCst);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(entered.load(Ordering::SeqCst), 200);
    assert!(!registry.is_spin_locked(LockKey::id(9)));
}
