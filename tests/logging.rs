//! Tests for the log records emitted on rejected mutations
//!
//! A single test installs the logger, since `log` accepts one per process.

use std::sync::Mutex;

use bitset_algebra::BitSet;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct Recorder {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for Recorder {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.lines
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static RECORDER: Recorder = Recorder { lines: Mutex::new(Vec::new()) };

fn debug_lines() -> Vec<String> {
    RECORDER
        .lines
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == Level::Debug)
        .map(|(_, line)| line.clone())
        .collect()
}

#[test]
fn test_rejected_mutations_are_logged_alike() {
    log::set_logger(&RECORDER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut set = BitSet::new(10).unwrap();
    assert!(set.insert(10).is_err());
    assert!(set.remove(-3i32).is_err());
    assert!(set.toggle(42u64).is_err());

    // Queries never log, even for out-of-range elements.
    assert!(!set.contains(99));

    let lines = debug_lines();
    assert_eq!(
        lines,
        vec![
            "[bitset] insert rejected: element 10 is out of range for capacity 10".to_owned(),
            "[bitset] remove rejected: element -3 is negative".to_owned(),
            "[bitset] toggle rejected: element 42 is out of range for capacity 10".to_owned(),
        ]
    );
}
