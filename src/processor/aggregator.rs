use std::collections::HashMap;
use tracing::{debug, warn};

use crate::models::{EpisodeEntry, NormalizedRecord, TitleAggregate};

/// The per-title state built up during ingestion.
///
/// Owned exclusively by the pagination driver while records are folded in;
/// read-only once ingestion completes.
#[derive(Debug, Default)]
pub struct HistoryAggregate {
    titles: HashMap<u64, TitleAggregate>,
}

impl HistoryAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titles(&self) -> &HashMap<u64, TitleAggregate> {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Folds one normalized record into the aggregate map.
    ///
    /// Films are write-once: history does not track repeat views of a film,
    /// so a second sighting of the same film id is skipped. Episodes are
    /// keyed by episode id within their series, last write wins.
    pub fn fold(&mut self, record: NormalizedRecord) {
        let unique_id = record.unique_id();

        match self.titles.get_mut(&unique_id) {
            None => {
                self.titles.insert(unique_id, Self::new_aggregate(record));
            }
            Some(TitleAggregate::Series { episodes, .. }) => match record {
                NormalizedRecord::Episode {
                    episode_id,
                    episode_title,
                    watch_date,
                    duration_secs,
                    ..
                } => {
                    episodes.insert(
                        episode_id,
                        EpisodeEntry {
                            title: episode_title,
                            watch_date,
                            duration_secs,
                        },
                    );
                }
                NormalizedRecord::Film { .. } => {
                    warn!(unique_id, "film record for a known series id; skipping");
                }
            },
            Some(TitleAggregate::Film { .. }) => match record {
                NormalizedRecord::Film { .. } => {
                    debug!(unique_id, "repeated film sighting; keeping first");
                }
                NormalizedRecord::Episode { .. } => {
                    warn!(unique_id, "episode record for a known film id; skipping");
                }
            },
        }
    }

    fn new_aggregate(record: NormalizedRecord) -> TitleAggregate {
        match record {
            NormalizedRecord::Film {
                title,
                watch_date,
                duration_secs,
                ..
            } => TitleAggregate::Film {
                title,
                watch_date,
                duration_secs,
            },
            NormalizedRecord::Episode {
                series_title,
                episode_id,
                episode_title,
                watch_date,
                duration_secs,
                ..
            } => TitleAggregate::Series {
                title: series_title,
                episodes: HashMap::from([(
                    episode_id,
                    EpisodeEntry {
                        title: episode_title,
                        watch_date,
                        duration_secs,
                    },
                )]),
            },
        }
    }
}
