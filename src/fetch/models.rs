use serde::Deserialize;

/// One page of the viewing-activity endpoint.
///
/// An absent or empty `viewedItems` array is the end-of-history signal.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPage {
    #[serde(rename = "viewedItems", default)]
    pub viewed_items: Vec<RawViewingRecord>,
}

impl RawPage {
    pub fn is_empty(&self) -> bool {
        self.viewed_items.is_empty()
    }
}

/// One entry of a history page in the service's native shape.
///
/// For episodes, `movieID` identifies the individual episode while `series`
/// identifies the show it belongs to. Every field is optional on the wire;
/// the classifier validates whichever subset its branch needs.
#[derive(Debug, Clone, Deserialize)]
pub struct RawViewingRecord {
    #[serde(rename = "movieID")]
    pub movie_id: Option<u64>,
    pub series: Option<u64>,
    #[serde(rename = "seriesTitle")]
    pub series_title: Option<String>,
    #[serde(rename = "videoTitle")]
    pub video_title: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "dateStr")]
    pub date_str: Option<String>,
    /// Seconds watched. The service sends integers for most rows but floats
    /// have been observed.
    pub duration: Option<f64>,
}
