use bedrock_core::diag;
use serial_test::serial;
use std::sync::{Arc, Mutex};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone)]
struct MockWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl std::io::Write for MockWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for MockWriter {
    type Writer = MockWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn setup_capture(level: LevelFilter) -> (MockWriter, tracing::subscriber::DefaultGuard) {
    let writer = MockWriter {
        buf: Arc::new(Mutex::new(Vec::new())),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_max_level(level)
        .json()
        .finish();

    (writer, tracing::subscriber::set_default(subscriber))
}

fn captured_events(writer: &MockWriter) -> Vec<serde_json::Value> {
    let output = String::from_utf8(writer.buf.lock().unwrap().clone()).unwrap();
    output
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn each_helper_emits_one_event_at_its_level() {
    let (writer, _guard) = setup_capture(LevelFilter::TRACE);

    diag::log("plain");
    diag::debug("detail");
    diag::info("note");
    diag::warn("careful");
    diag::error("broken");

    let events = captured_events(&writer);
    let seen: Vec<(&str, &str)> = events
        .iter()
        .map(|e| {
            (
                e["level"].as_str().unwrap(),
                e["fields"]["message"].as_str().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        seen,
        vec![
            ("INFO", "plain"),
            ("DEBUG", "detail"),
            ("INFO", "note"),
            ("WARN", "careful"),
            ("ERROR", "broken"),
        ]
    );
    assert!(events.iter().all(|e| e["target"] == diag::TARGET));
}

#[test]
fn level_filter_drops_lower_events() {
    let (writer, _guard) = setup_capture(LevelFilter::WARN);

    diag::info("hidden");
    diag::warn("shown");

    let events = captured_events(&writer);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["fields"]["message"], "shown");
}

#[test]
fn rejected_null_date_is_logged_at_debug() {
    let (writer, _guard) = setup_capture(LevelFilter::DEBUG);

    let d = chrono::NaiveDate::from_ymd_opt(1000, 1, 1).unwrap();
    assert!(bedrock_core::calendar::date_from_naive(d).is_err());

    let events = captured_events(&writer);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["level"], "DEBUG");
    assert_eq!(events[0]["fields"]["date"], "1000-01-01");
}

#[test]
#[serial]
fn env_filter_reads_bedrock_log() {
    std::env::set_var(diag::LOG_ENV, "warn");
    assert_eq!(diag::env_filter().max_level_hint(), Some(LevelFilter::WARN));
    std::env::remove_var(diag::LOG_ENV);
}

#[test]
#[serial]
fn env_filter_defaults_to_info() {
    std::env::remove_var(diag::LOG_ENV);
    assert_eq!(diag::env_filter().max_level_hint(), Some(LevelFilter::INFO));
}
