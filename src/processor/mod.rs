pub mod aggregator;
pub mod classifier;
pub mod csv_generator;
pub mod history_processor;
pub mod progress_tracker;
pub mod stats;

pub use aggregator::HistoryAggregate;
pub use csv_generator::CsvGenerator;
pub use history_processor::HistoryProcessor;
pub use progress_tracker::ProgressTracker;
