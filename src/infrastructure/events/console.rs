//! Console Event Sink
//!
//! Human-readable informational lines for interactive builds.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{BuildEvent, BuildEventSink};

/// Event sink that prints informational lines
pub struct ConsoleEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: bool,
}

impl ConsoleEventSink {
    /// Create a console sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
            verbose: false,
        }
    }

    /// Create a console sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose: false,
        }
    }

    /// Enable per-class lines
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

impl BuildEventSink for ConsoleEventSink {
    fn on_event(&self, event: BuildEvent) {
        match event {
            BuildEvent::Started {
                source_count,
                output_dir,
            } => {
                self.write_line(&format!(
                    "Compiling {} source file{} to {}",
                    source_count,
                    plural(source_count),
                    output_dir.display()
                ));
            }

            BuildEvent::SkippedNoSources => {
                self.write_line("No sources specified for compilation. Skipping.");
            }

            // The count is reported once everything is on disk.
            BuildEvent::Compiled { .. } => {}

            BuildEvent::ClassWritten { path, .. } => {
                if self.verbose {
                    self.write_line(&format!("  wrote {}", path.display()));
                }
            }

            BuildEvent::Completed { class_count } => {
                self.write_line(&format!(
                    "Compiled {} file{}.",
                    class_count,
                    plural(class_count)
                ));
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose
    }
}
