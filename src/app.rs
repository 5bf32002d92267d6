use crate::config::{AppConfig, ReportFormat};
use crate::error::AppError;
use crate::fetch::HistoryClient;
use crate::models::Summary;
use crate::processor::{stats, CsvGenerator, HistoryAggregate, HistoryProcessor, ProgressTracker};
use crate::shutdown::ShutdownManager;

pub struct App {
    config: AppConfig,
    shutdown: ShutdownManager,
    progress: ProgressTracker,
}

impl App {
    pub fn new_with_config(config: AppConfig, shutdown: ShutdownManager) -> Self {
        Self {
            config,
            shutdown,
            progress: ProgressTracker::new(),
        }
    }

    pub async fn run(&mut self) -> Result<(), AppError> {
        // 1. Drive pagination until the history is exhausted
        let aggregate = self.ingest_history().await?;

        // 2. Rank titles and dates over the completed aggregate
        let summary = stats::summarize(&aggregate, self.config.report.top_count);

        // 3. Optional per-title CSV export
        if let Some(csv_path) = &self.config.report.csv_path {
            CsvGenerator::new(csv_path).generate(&aggregate)?;
        }

        self.progress.complete("Done");
        self.render_report(&summary)
    }

    async fn ingest_history(&mut self) -> Result<HistoryAggregate, AppError> {
        self.progress.start("Fetching viewing history");
        let fetcher = HistoryClient::new(self.config.history.base_url.clone(), &self.config.fetch)?;

        HistoryProcessor::ingest(
            &fetcher,
            self.config.fetch.max_pages,
            &self.shutdown,
            &mut self.progress,
        )
        .await
    }

    fn render_report(&self, summary: &Summary) -> Result<(), AppError> {
        match self.config.report.format {
            ReportFormat::Text => println!("{}", render_text(summary)),
            ReportFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
        }
        Ok(())
    }
}

/// Plain-text rendition of the summary, one ranking entry per line.
fn render_text(summary: &Summary) -> String {
    let mut out = String::new();
    out.push_str("Netflix viewing stats\n");
    out.push_str("=====================\n");
    out.push_str(&format!(
        "Different films / series viewed: {}\n",
        summary.distinct_title_count
    ));
    out.push_str(&format!(
        "Total time spent watching: {:.0} hours\n",
        summary.total_hours
    ));

    out.push_str("\nMost watched:\n");
    for (rank, (title, hours)) in summary.top_titles.iter().enumerate() {
        out.push_str(&format!("  {}. {} - {:.1} hours\n", rank + 1, title, hours));
    }

    out.push_str("\nLongest time spent watching in a day:\n");
    for (rank, (date, hours)) in summary.top_dates.iter().enumerate() {
        out.push_str(&format!("  {}. {} - {:.1} hours\n", rank + 1, date, hours));
    }

    out
}
