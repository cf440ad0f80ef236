use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static INIT: Once = Once::new();
static LOGGER: MockLogger = MockLogger;

/// Collecting logger capturing emitted records for assertions.
///
/// The process logger can only be installed once: tests relying on the captured
/// records must be serialized (see `serial_test`) since the record store is shared.
pub struct MockLogger;

impl MockLogger {
    /// Installs the collector as the process logger (once) and clears previously
    /// captured records.
    pub fn init() {
        INIT.call_once(|| {
            log::set_logger(&LOGGER).expect("logger already installed");
            log::set_max_level(LevelFilter::Trace);
        });
        RECORDS.lock().clear();
    }

    /// Returns the captured messages of the given level, in emission order.
    pub fn records(level: Level) -> Vec<String> {
        RECORDS
            .lock()
            .iter()
            .filter(|(record_level, _)| *record_level == level)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl Log for MockLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}
