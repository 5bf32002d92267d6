use crate::error::AppError;
use crate::fetch::models::RawViewingRecord;
use crate::models::NormalizedRecord;

/// Classifies one raw record as a film or an episode.
///
/// A non-empty `seriesTitle` selects the episode branch; otherwise the record
/// is a standalone film. Each branch validates the fields it needs and fails
/// with `MalformedRecord` rather than producing a corrupted aggregate.
pub fn classify(raw: RawViewingRecord) -> Result<NormalizedRecord, AppError> {
    let movie_id = require(raw.movie_id, "movieID")?;
    let watch_date = require(raw.date_str, "dateStr")?;
    let duration_secs = require(raw.duration, "duration")?;

    let is_episode = raw.series_title.as_deref().is_some_and(|t| !t.is_empty());

    if is_episode {
        Ok(NormalizedRecord::Episode {
            series_id: require(raw.series, "series")?,
            series_title: raw.series_title.unwrap_or_default(),
            episode_id: movie_id,
            episode_title: require(raw.title, "title")?,
            watch_date,
            duration_secs,
        })
    } else {
        Ok(NormalizedRecord::Film {
            movie_id,
            title: require(raw.video_title, "videoTitle")?,
            watch_date,
            duration_secs,
        })
    }
}

fn require<T>(field: Option<T>, name: &'static str) -> Result<T, AppError> {
    field.ok_or(AppError::MalformedRecord { field: name })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawViewingRecord {
        RawViewingRecord {
            movie_id: Some(101),
            series: None,
            series_title: None,
            video_title: Some("Snatch".into()),
            title: None,
            date_str: Some("25/10/17".into()),
            duration: Some(6147.0),
        }
    }

    #[test]
    fn record_without_series_title_is_a_film() {
        let record = classify(raw()).unwrap();
        assert_eq!(
            record,
            NormalizedRecord::Film {
                movie_id: 101,
                title: "Snatch".into(),
                watch_date: "25/10/17".into(),
                duration_secs: 6147.0,
            }
        );
        assert_eq!(record.unique_id(), 101);
    }

    #[test]
    fn record_with_series_title_is_an_episode_grouped_by_series_id() {
        let record = classify(RawViewingRecord {
            series: Some(900),
            series_title: Some("Stranger Things".into()),
            title: Some("Chapter One".into()),
            ..raw()
        })
        .unwrap();

        assert_eq!(
            record,
            NormalizedRecord::Episode {
                series_id: 900,
                series_title: "Stranger Things".into(),
                episode_id: 101,
                episode_title: "Chapter One".into(),
                watch_date: "25/10/17".into(),
                duration_secs: 6147.0,
            }
        );
        assert_eq!(record.unique_id(), 900);
    }

    #[test]
    fn empty_series_title_still_classifies_as_film() {
        let record = classify(RawViewingRecord {
            series_title: Some(String::new()),
            ..raw()
        })
        .unwrap();
        assert!(matches!(record, NormalizedRecord::Film { .. }));
    }

    #[test]
    fn missing_film_fields_are_rejected() {
        let err = classify(RawViewingRecord {
            video_title: None,
            ..raw()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::MalformedRecord { field: "videoTitle" }
        ));

        let err = classify(RawViewingRecord {
            duration: None,
            ..raw()
        })
        .unwrap_err();
        assert!(matches!(err, AppError::MalformedRecord { field: "duration" }));
    }

    #[test]
    fn episode_missing_series_id_is_rejected() {
        let err = classify(RawViewingRecord {
            series: None,
            series_title: Some("Stranger Things".into()),
            title: Some("Chapter One".into()),
            ..raw()
        })
        .unwrap_err();
        assert!(matches!(err, AppError::MalformedRecord { field: "series" }));
    }
}
