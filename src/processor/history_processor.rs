use tracing::{debug, info};

use crate::error::AppError;
use crate::fetch::PageFetcher;
use crate::processor::aggregator::HistoryAggregate;
use crate::processor::classifier::classify;
use crate::processor::progress_tracker::ProgressTracker;
use crate::shutdown::ShutdownManager;

pub struct HistoryProcessor;

impl HistoryProcessor {
    /// Drives pagination from page 0 until the service returns an empty page,
    /// folding every record into a fresh aggregate.
    ///
    /// One fetch is in flight at a time. Any fetch or classification error
    /// aborts the whole run with no partial result. `max_pages` bounds the
    /// loop against a service that never sends an empty page, and the
    /// shutdown flag is checked before each fetch.
    pub async fn ingest(
        fetcher: &dyn PageFetcher,
        max_pages: usize,
        shutdown: &ShutdownManager,
        progress: &mut ProgressTracker,
    ) -> Result<HistoryAggregate, AppError> {
        let mut aggregate = HistoryAggregate::new();
        let mut records_seen = 0usize;

        for page in 0.. {
            if shutdown.is_shutdown() {
                return Err(AppError::Cancelled);
            }
            if page >= max_pages {
                return Err(AppError::PageLimitError { limit: max_pages });
            }

            progress.log_fetching(page);
            let raw_page = fetcher.fetch_page(page).await?;

            if raw_page.is_empty() {
                info!(pages = page, records = records_seen, "history exhausted");
                progress.log_ingested(page, records_seen);
                return Ok(aggregate);
            }

            debug!(page, records = raw_page.viewed_items.len(), "got page");
            records_seen += raw_page.viewed_items.len();

            for raw in raw_page.viewed_items {
                aggregate.fold(classify(raw)?);
            }
        }

        unreachable!("pagination loop only exits via return");
    }
}
