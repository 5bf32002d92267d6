use super::*;
use crate::config::FetchConfig;

const SAMPLE_PAGE: &str = r#"{
    "viewedItems": [
        {
            "movieID": 80117715,
            "series": 80057281,
            "seriesTitle": "Stranger Things",
            "title": "Chapter One: MADMAX",
            "dateStr": "27/10/17",
            "duration": 2932
        },
        {
            "movieID": 60029591,
            "videoTitle": "Snatch",
            "dateStr": "25/10/17",
            "duration": 6147.5
        }
    ]
}"#;

#[test]
fn decodes_mixed_page() {
    let page: RawPage = serde_json::from_str(SAMPLE_PAGE).unwrap();
    assert_eq!(page.viewed_items.len(), 2);

    let episode = &page.viewed_items[0];
    assert_eq!(episode.movie_id, Some(80117715));
    assert_eq!(episode.series, Some(80057281));
    assert_eq!(episode.series_title.as_deref(), Some("Stranger Things"));
    assert_eq!(episode.title.as_deref(), Some("Chapter One: MADMAX"));
    assert_eq!(episode.duration, Some(2932.0));

    let film = &page.viewed_items[1];
    assert_eq!(film.series_title, None);
    assert_eq!(film.video_title.as_deref(), Some("Snatch"));
    assert_eq!(film.duration, Some(6147.5));
}

#[test]
fn missing_viewed_items_key_is_an_empty_page() {
    let page: RawPage = serde_json::from_str("{}").unwrap();
    assert!(page.is_empty());

    let page: RawPage = serde_json::from_str(r#"{"viewedItems": []}"#).unwrap();
    assert!(page.is_empty());
}

#[test]
fn unknown_wire_fields_are_ignored() {
    let body = r#"{"viewedItems": [{"movieID": 1, "videoTitle": "A",
        "dateStr": "1/1/20", "duration": 60, "bookmark": 123, "country": "GB"}]}"#;
    let page: RawPage = serde_json::from_str(body).unwrap();
    assert_eq!(page.viewed_items[0].movie_id, Some(1));
}

#[test]
fn page_url_appends_page_parameter() {
    let config = FetchConfig::default();
    let client = HistoryClient::new(
        "https://example.net/api/shakti/abc/viewingactivity?authURL=token".into(),
        &config,
    )
    .unwrap();

    assert_eq!(
        client.page_url(3),
        "https://example.net/api/shakti/abc/viewingactivity?authURL=token&pg=3"
    );
}
