use csv::Writer;
use std::{fs::File, path::Path};

use crate::error::AppError;
use crate::models::TitleAggregate;
use crate::processor::aggregator::HistoryAggregate;

/// Writes one row per title aggregate, most-watched first.
pub struct CsvGenerator {
    output_path: String,
}

impl CsvGenerator {
    pub fn new(output_path: &Path) -> Self {
        Self {
            output_path: output_path.to_string_lossy().to_string(),
        }
    }

    pub fn generate(&self, aggregate: &HistoryAggregate) -> Result<(), AppError> {
        let file = File::create(Path::new(&self.output_path))?;
        let mut wtr = Writer::from_writer(file);

        wtr.write_record(["id", "type", "title", "episodes", "total_seconds"])?;

        let mut rows: Vec<(&u64, &TitleAggregate)> = aggregate.titles().iter().collect();
        rows.sort_by(|a, b| b.1.total_secs().total_cmp(&a.1.total_secs()));

        for (id, title_agg) in rows {
            let (kind, episodes) = match title_agg {
                TitleAggregate::Film { .. } => ("film", String::new()),
                TitleAggregate::Series { episodes, .. } => ("series", episodes.len().to_string()),
            };

            wtr.write_record([
                id.to_string(),
                kind.to_string(),
                title_agg.title().to_string(),
                episodes,
                title_agg.total_secs().to_string(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
