//! JSON Event Sink
//!
//! Outputs build events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{BuildEvent, BuildEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        let json = match event {
            BuildEvent::Started {
                source_count,
                output_dir,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "compile",
                    "source_count": source_count,
                    "output_dir": output_dir.display().to_string(),
                })
            }

            BuildEvent::SkippedNoSources => {
                serde_json::json!({
                    "event": "skipped",
                    "command": "compile",
                    "reason": "no sources",
                })
            }

            BuildEvent::Compiled { class_count } => {
                serde_json::json!({
                    "event": "compiled",
                    "command": "compile",
                    "class_count": class_count,
                })
            }

            BuildEvent::ClassWritten { index, path } => {
                serde_json::json!({
                    "event": "class_written",
                    "command": "compile",
                    "index": index,
                    "path": path.display().to_string(),
                })
            }

            BuildEvent::Completed { class_count } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "compile",
                    "status": "success",
                    "class_count": class_count,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
