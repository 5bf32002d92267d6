use serde::Serialize;
use std::collections::HashMap;

/// One viewing record after classification, ready for aggregation.
///
/// The two variants correspond to the two shapes Netflix history pages mix
/// together: standalone films, and episodes that belong to a series.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedRecord {
    Film {
        movie_id: u64,
        title: String,
        watch_date: String,
        duration_secs: f64,
    },
    Episode {
        series_id: u64,
        series_title: String,
        episode_id: u64,
        episode_title: String,
        watch_date: String,
        duration_secs: f64,
    },
}

impl NormalizedRecord {
    /// The grouping key: the series id for episodes, the movie id for films.
    pub fn unique_id(&self) -> u64 {
        match self {
            NormalizedRecord::Film { movie_id, .. } => *movie_id,
            NormalizedRecord::Episode { series_id, .. } => *series_id,
        }
    }
}

/// A single episode's watch data inside a series aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeEntry {
    pub title: String,
    pub watch_date: String,
    pub duration_secs: f64,
}

/// Accumulated state for one film or one series across the whole history.
///
/// The variant is fixed at creation; a grouping id never switches between
/// film and series.
#[derive(Debug, Clone, PartialEq)]
pub enum TitleAggregate {
    Film {
        title: String,
        watch_date: String,
        duration_secs: f64,
    },
    Series {
        title: String,
        episodes: HashMap<u64, EpisodeEntry>,
    },
}

impl TitleAggregate {
    pub fn title(&self) -> &str {
        match self {
            TitleAggregate::Film { title, .. } => title,
            TitleAggregate::Series { title, .. } => title,
        }
    }

    /// Total seconds watched: a film's single duration, or the sum over
    /// all episode entries for a series.
    pub fn total_secs(&self) -> f64 {
        match self {
            TitleAggregate::Film { duration_secs, .. } => *duration_secs,
            TitleAggregate::Series { episodes, .. } => {
                episodes.values().map(|ep| ep.duration_secs).sum()
            }
        }
    }
}

/// Ranked summary statistics computed once ingestion has finished.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_hours: f64,
    pub distinct_title_count: usize,
    /// Highest watch-time titles, descending, in hours.
    pub top_titles: Vec<(String, f64)>,
    /// Highest watch-time calendar dates, descending, in hours.
    pub top_dates: Vec<(String, f64)>,
}
