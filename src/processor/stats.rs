use std::collections::HashMap;

use crate::models::{Summary, TitleAggregate};
use crate::processor::aggregator::HistoryAggregate;

const SECS_PER_HOUR: f64 = 3600.0;

/// Computes ranked summary statistics over a completed aggregate.
///
/// Aggregates that share a display title accumulate into one summary key:
/// the same name is treated as the same show. Read-only; never fails.
pub fn summarize(aggregate: &HistoryAggregate, top_n: usize) -> Summary {
    let mut title_secs: HashMap<&str, f64> = HashMap::new();
    let mut date_secs: HashMap<&str, f64> = HashMap::new();

    for title_agg in aggregate.titles().values() {
        match title_agg {
            TitleAggregate::Film {
                title,
                watch_date,
                duration_secs,
            } => {
                *title_secs.entry(title.as_str()).or_default() += duration_secs;
                *date_secs.entry(watch_date.as_str()).or_default() += duration_secs;
            }
            TitleAggregate::Series { title, episodes } => {
                let series_secs = title_secs.entry(title.as_str()).or_default();
                for episode in episodes.values() {
                    *series_secs += episode.duration_secs;
                }
                for episode in episodes.values() {
                    *date_secs.entry(episode.watch_date.as_str()).or_default() +=
                        episode.duration_secs;
                }
            }
        }
    }

    let total_secs: f64 = title_secs.values().sum();

    Summary {
        total_hours: total_secs / SECS_PER_HOUR,
        distinct_title_count: aggregate.len(),
        top_titles: top_by_secs(title_secs, top_n),
        top_dates: top_by_secs(date_secs, top_n),
    }
}

/// The `n` largest keys by seconds, descending, converted to hours.
/// Order between equal values is unspecified.
fn top_by_secs(secs: HashMap<&str, f64>, n: usize) -> Vec<(String, f64)> {
    let mut ranked: Vec<(&str, f64)> = secs.into_iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(n);
    ranked
        .into_iter()
        .map(|(key, secs)| (key.to_owned(), secs / SECS_PER_HOUR))
        .collect()
}
