use crate::output::traits::NotificationSink;
use async_trait::async_trait;
use std::io::Write;

/// Sink that prints each message to a writer (stdout by default)
///
/// Used when no webhook is configured.
pub struct ConsoleSink<W: Write + Send = std::io::Stdout> {
    out: W,
    lines: Vec<String>,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            lines: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[async_trait]
impl<W: Write + Send> NotificationSink for ConsoleSink<W> {
    fn add_line(&mut self, line: String) {
        self.lines.push(line);
    }

    async fn post(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        let mut message = std::mem::take(&mut self.lines).join("\n");
        message.push_str("\n\n");
        if let Err(e) = self
            .out
            .write_all(message.as_bytes())
            .and_then(|_| self.out.flush())
        {
            tracing::warn!("Could not print match report: {}", e);
        }
    }
}
