#![cfg(feature = "tracing")]
//! Trace events emitted by the panic bridges.

use std::sync::{Arc, Mutex};

use outcomes::outcome::{self, Outcome};
use rstest::rstest;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Registry;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
struct CapturedEvent {
    level: Level,
    fields: Vec<(String, String)>,
}

impl CapturedEvent {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

struct FieldCollector(Vec<(String, String)>);

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureLayer {
    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _context: Context<'_, S>) {
        let mut collector = FieldCollector(Vec::new());
        event.record(&mut collector);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: collector.0,
        });
    }
}

fn capture<T>(body: impl FnOnce() -> T) -> (T, Vec<CapturedEvent>) {
    let layer = CaptureLayer::default();
    let result =
        tracing::subscriber::with_default(Registry::default().with(layer.clone()), body);
    (result, layer.events())
}

#[rstest]
fn test_captured_panic_emits_trace_event() {
    let (captured, events) = capture(|| outcome::try_call(|| -> i32 { panic!("boom") }));

    assert!(captured.is_err());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::TRACE);
    assert_eq!(events[0].field("panic_message"), Some("boom"));
    assert_eq!(events[0].field("message"), Some("captured panic as Err"));
}

#[rstest]
fn test_thrown_error_emits_trace_event_with_payload_type() {
    let (captured, events) =
        capture(|| outcome::try_call(|| Outcome::<i32, u8>::Err(3).unwrap_or_throw()));

    assert_eq!(captured.unwrap_err().downcast::<u8>().ok(), Some(3));
    let raised = events
        .iter()
        .find(|event| event.field("message") == Some("raising error payload as panic"))
        .unwrap();
    assert_eq!(raised.field("payload"), Some("u8"));
    assert!(
        events
            .iter()
            .any(|event| event.field("panic_message") == Some("<non-string payload>"))
    );
}

#[rstest]
fn test_normal_return_emits_nothing() {
    let (captured, events) = capture(|| outcome::try_call(|| 5));

    assert_eq!(captured.unwrap(), 5);
    assert!(events.is_empty());
}
