use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

pub struct ProgressTracker {
    pb: ProgressBar,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new() -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            pb,
            start_time: Instant::now(),
        }
    }

    /// A tracker that draws nothing; used by tests.
    pub fn hidden() -> Self {
        Self {
            pb: ProgressBar::hidden(),
            start_time: Instant::now(),
        }
    }

    pub fn start(&mut self, msg: &str) {
        self.pb.set_message(msg.to_string());
    }

    pub fn log_fetching(&mut self, page: usize) {
        self.pb.set_message(format!("Fetching history page {page}..."));
    }

    pub fn log_ingested(&mut self, pages: usize, records: usize) {
        self.pb.set_message(format!(
            "Ingested {records} records from {pages} pages, computing stats..."
        ));
    }

    pub fn complete(&self, msg: &str) {
        self.pb.finish_with_message(format!(
            "{} in {:.2} seconds",
            msg,
            self.start_time.elapsed().as_secs_f32()
        ));
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}
