use std::collections::HashSet;

use tracing::debug;

use crate::models::recommendation::{CollectionProfile, Recommendation};
use crate::models::whiskey::WhiskeyRecord;
use crate::services::catalog::{Category, CatalogEntry, CATALOG};

/// Recommendations returned for a single bottle.
pub const MAX_SINGLE_RESULTS: usize = 6;

/// Recommendations returned for a collection profile.
pub const MAX_COLLECTION_RESULTS: usize = 8;

/// Only this many top categories feed the single-bottle list.
const TOP_CATEGORIES: usize = 5;

/// Entries taken from any one category, for variety.
const PICKS_PER_CATEGORY: usize = 2;

/// Display range for match percentages.
pub const MIN_MATCH_SCORE: u8 = 65;
pub const MAX_MATCH_SCORE: u8 = 98;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RecommendError {
    #[error("Cannot profile an empty collection")]
    EmptyCollection,
}

/// Raw score of one category for a bottle or a whole collection.
#[derive(Debug, Clone, Copy)]
pub struct CategoryScore {
    pub category: &'static Category,
    pub raw: u32,
}

/// Score every category for one bottle, best first.
///
/// Ties keep catalog order.
pub fn category_scores(whiskey: &WhiskeyRecord) -> Vec<CategoryScore> {
    let mut scores: Vec<CategoryScore> = CATALOG
        .iter()
        .map(|category| CategoryScore {
            category,
            raw: (category.score)(whiskey),
        })
        .collect();
    rank(&mut scores);
    scores
}

fn rank(scores: &mut [CategoryScore]) {
    // sort_by is stable
    scores.sort_by(|a, b| b.raw.cmp(&a.raw));
}

/// Map a raw score (summed over `whiskey_count` bottles) onto the 65..=98
/// display range: `clamp(round(raw / whiskey_count * 1.1), 65, 98)`.
///
/// Rounds half up, in integer arithmetic so `x.5` boundaries are exact.
pub fn normalize_match_score(raw: u32, whiskey_count: usize) -> u8 {
    let count = u64::try_from(whiskey_count.max(1)).unwrap_or(u64::MAX);
    let numerator = u64::from(raw) * 11;
    let denominator = count * 10;
    let rounded = (2 * numerator + denominator) / (2 * denominator);
    let clamped = rounded.clamp(u64::from(MIN_MATCH_SCORE), u64::from(MAX_MATCH_SCORE));
    u8::try_from(clamped).unwrap_or(MAX_MATCH_SCORE)
}

fn to_recommendation(entry: &CatalogEntry, match_score: u8) -> Recommendation {
    Recommendation {
        title: entry.title.to_string(),
        genre: entry.genre.iter().map(|g| g.to_string()).collect(),
        reasoning: entry.reasoning.to_string(),
        match_score,
        streaming: entry.streaming.iter().map(|s| s.to_string()).collect(),
        mal_score: entry.mal_score,
    }
}

/// Walk ranked categories and take up to two unseen titles from each.
fn select<'a>(
    ranked: impl IntoIterator<Item = &'a CategoryScore>,
    whiskey_count: usize,
    limit: usize,
) -> Vec<Recommendation> {
    let mut seen: HashSet<&'static str> = HashSet::new();
    let mut results = Vec::new();

    for scored in ranked {
        if scored.raw == 0 {
            continue;
        }
        let match_score = normalize_match_score(scored.raw, whiskey_count);
        let fresh = scored
            .category
            .entries
            .iter()
            .filter(|entry| seen.insert(entry.title))
            .take(PICKS_PER_CATEGORY);
        for entry in fresh {
            results.push(to_recommendation(entry, match_score));
        }
    }

    results.truncate(limit);
    results
}

/// Up to six anime for one bottle, best match first.
pub fn recommend_for_whiskey(whiskey: &WhiskeyRecord) -> Vec<Recommendation> {
    let scores = category_scores(whiskey);
    debug!(
        whiskey = %whiskey.name,
        top_category = scores.first().map(|s| s.category.label).unwrap_or_default(),
        top_score = scores.first().map(|s| s.raw).unwrap_or_default(),
        "Scored categories for bottle"
    );
    select(scores.iter().take(TOP_CATEGORIES), 1, MAX_SINGLE_RESULTS)
}

/// Dominant category and up to eight anime for a whole collection.
///
/// Category scores are summed over every bottle, then averaged before they
/// are mapped onto the display range.
pub fn recommend_for_collection(
    whiskeys: &[WhiskeyRecord],
) -> Result<CollectionProfile, RecommendError> {
    if whiskeys.is_empty() {
        return Err(RecommendError::EmptyCollection);
    }

    let mut totals: Vec<CategoryScore> = CATALOG
        .iter()
        .map(|category| CategoryScore {
            category,
            raw: whiskeys
                .iter()
                .map(|w| (category.score)(w))
                .fold(0u32, u32::saturating_add),
        })
        .collect();

    // Strictly greater, so the first category defined wins a tie.
    let mut top: Option<&CategoryScore> = None;
    for scored in &totals {
        if scored.raw > top.map_or(0, |t| t.raw) {
            top = Some(scored);
        }
    }
    let top_category = top
        .map(|t| t.category.display_label())
        .unwrap_or_default();

    rank(&mut totals);
    let recommendations = select(&totals, whiskeys.len(), MAX_COLLECTION_RESULTS);

    debug!(
        bottles = whiskeys.len(),
        top_category = %top_category,
        count = recommendations.len(),
        "Built collection profile"
    );

    Ok(CollectionProfile {
        top_category,
        recommendations,
    })
}
