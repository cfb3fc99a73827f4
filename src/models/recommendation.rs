use serde::{Deserialize, Serialize};

use crate::models::whiskey::WhiskeyRecord;

/// One anime suggested for a whiskey or a collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,
    pub genre: Vec<String>,
    pub reasoning: String,
    /// Display match percentage, always within 65..=98.
    pub match_score: u8,
    pub streaming: Vec<String>,
    /// Fixed MyAnimeList-style quality score out of 10.
    pub mal_score: f64,
}

/// Aggregate recommendation over an entire collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionProfile {
    /// Dominant category label with underscores shown as spaces.
    pub top_category: String,
    pub recommendations: Vec<Recommendation>,
}

/// Illustrative whiskey/anime pairing shown on the landing view.
#[derive(Debug, Clone, Serialize)]
pub struct Pairing {
    pub bourbon: &'static str,
    pub anime: &'static str,
    pub reasoning: &'static str,
}

/// Request body for a single-bottle recommendation.
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub whiskey: Option<WhiskeyRecord>,
}

/// Response after scoring a single bottle.
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
    pub message: String,
}

/// Request body carrying a whole collection.
#[derive(Debug, Deserialize)]
pub struct CollectionRequest {
    #[serde(default)]
    pub whiskeys: Vec<WhiskeyRecord>,
}
