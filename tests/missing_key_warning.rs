use std::sync::Mutex;

use fashionaire_config::{Config, MemoryStore, Mode};
use log::{Level, Log, Metadata, Record};

static WARNINGS: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Warn && record.target().starts_with("fashionaire_config") {
            WARNINGS.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

// Single test in this binary: the logger is process-global.
#[test]
fn test_warning_counts() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(log::LevelFilter::Warn);

    let config = Config::builder()
        .env(MemoryStore::new())
        .storage(MemoryStore::new())
        .build();

    assert_eq!(config.api_key(), None);
    assert_eq!(config.mode(), Mode::Production);
    {
        let warnings = WARNINGS.lock().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("GOOGLE_AI_API_KEY"));
    }

    WARNINGS.lock().unwrap().clear();
    let config = Config::builder()
        .env(MemoryStore::new().with("GOOGLE_AI_API_KEY", "AIzaSyABCDEFGHIJK"))
        .build();

    assert_eq!(config.api_key(), Some("AIzaSyABCDEFGHIJK"));
    assert!(WARNINGS.lock().unwrap().is_empty());

    // an unknown mode warns separately from the missing key
    WARNINGS.lock().unwrap().clear();
    let config = Config::builder()
        .env(MemoryStore::new().with("FASHIONAIRE_ENV", "staging"))
        .build();

    assert_eq!(config.api_key(), None);
    assert_eq!(config.mode(), Mode::Production);
    let warnings = WARNINGS.lock().unwrap();
    assert_eq!(warnings.len(), 2);
    assert_eq!(
        warnings.iter().filter(|w| w.contains("GOOGLE_AI_API_KEY")).count(),
        1
    );
    assert_eq!(warnings.iter().filter(|w| w.contains("staging")).count(), 1);
}
