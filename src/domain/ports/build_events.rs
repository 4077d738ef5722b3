//! Build Event Port
//!
//! Provides an observable interface for compile runs.
//! Enables console notices, NDJSON event streams, and debugging.

use std::path::PathBuf;

/// Event emitted during a compile run
#[derive(Debug, Clone)]
pub enum BuildEvent {
    /// Compilation started
    Started {
        source_count: usize,
        output_dir: PathBuf,
    },

    /// Nothing to compile; the run is a deliberate no-op
    SkippedNoSources,

    /// The compiler service returned
    Compiled { class_count: usize },

    /// One compiled class was written to disk
    ClassWritten { index: usize, path: PathBuf },

    /// The run reached completion and all artifacts are on disk
    Completed { class_count: usize },
}

/// Trait for receiving build events
///
/// Implementations can be:
/// - ConsoleEventSink: informational lines in a terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait BuildEventSink: Send + Sync {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);

    /// Check if this sink wants per-class detail events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {
        // Do nothing
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test event sink that records all events
    struct RecordingEventSink {
        events: Arc<Mutex<Vec<BuildEvent>>>,
    }

    impl RecordingEventSink {
        fn new() -> (Self, Arc<Mutex<Vec<BuildEvent>>>) {
            let events = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    events: events.clone(),
                },
                events,
            )
        }
    }

    impl BuildEventSink for RecordingEventSink {
        fn on_event(&self, event: BuildEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let (sink, events) = RecordingEventSink::new();

        sink.on_event(BuildEvent::Started {
            source_count: 2,
            output_dir: PathBuf::from("target/classes"),
        });
        sink.on_event(BuildEvent::Completed { class_count: 2 });

        let recorded = events.lock().unwrap();
        assert_eq!(recorded.len(), 2);
    }

    #[test]
    fn noop_sink_wants_no_details() {
        let sink = NoopEventSink;
        assert!(!sink.wants_detailed_events());
    }
}
