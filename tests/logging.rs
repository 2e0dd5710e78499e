#![cfg(feature = "log")]

use inline_optional::{BadOptionalAccess, Optional};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

struct Capture(Mutex<Vec<(Level, String)>>);

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut records) = self.0.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

fn captured() -> Vec<(Level, String)> {
    CAPTURE.0.lock().map(|records| records.clone()).unwrap_or_default()
}

// one test per binary: the logger is process-global
#[test]
fn only_failed_access_emits_a_debug_record() {
    log::set_logger(&CAPTURE).expect("logger installed once");
    log::set_max_level(LevelFilter::Trace);

    let mut engaged = Optional::new_engaged(1_u32);
    assert_eq!(engaged.value(), Ok(&1));
    engaged.assign(2);
    engaged.reset();
    engaged.emplace(3);
    assert!(captured().is_empty(), "successful operations must stay silent");

    let empty: Optional<u32> = Optional::new();
    assert_eq!(empty.value(), Err(BadOptionalAccess));

    let records = captured();
    assert_eq!(records.len(), 1);
    let (level, message) = &records[0];
    assert_eq!(*level, Level::Debug);
    assert!(message.contains("u32"), "record should name the payload type: {message}");
}
