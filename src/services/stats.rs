use std::cmp::Ordering;

use crate::models::stats::{CollectionStats, TypeBreakdown};
use crate::models::whiskey::WhiskeyRecord;

/// Bottles listed in the "most expensive" and "recently added" panels.
const HIGHLIGHT_COUNT: usize = 5;

/// Compute collection-wide figures for the statistics view.
pub fn collection_stats(whiskeys: &[WhiskeyRecord]) -> CollectionStats {
    let total_value = whiskeys
        .iter()
        .filter_map(|w| w.purchase_price)
        .sum::<f64>();

    let ratings: Vec<u8> = whiskeys
        .iter()
        .filter_map(|w| w.rating)
        .filter(|r| *r > 0)
        .collect();
    let avg_rating = if ratings.is_empty() {
        0.0
    } else {
        ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / ratings.len() as f64
    };

    CollectionStats {
        total_bottles: whiskeys.len(),
        total_value,
        type_breakdown: type_breakdown(whiskeys),
        most_expensive: most_expensive(whiskeys),
        recently_added: recently_added(whiskeys),
        avg_rating,
    }
}

/// Count and spend per style, most common first. Equal counts keep the order
/// in which each style first appears.
fn type_breakdown(whiskeys: &[WhiskeyRecord]) -> Vec<TypeBreakdown> {
    let mut breakdown: Vec<TypeBreakdown> = Vec::new();
    for w in whiskeys {
        let price = w.purchase_price.unwrap_or(0.0);
        match breakdown.iter_mut().find(|b| b.whiskey_type == w.whiskey_type) {
            Some(entry) => {
                entry.count += 1;
                entry.value += price;
            }
            None => breakdown.push(TypeBreakdown {
                whiskey_type: w.whiskey_type,
                count: 1,
                value: price,
            }),
        }
    }
    breakdown.sort_by(|a, b| b.count.cmp(&a.count));
    breakdown
}

fn most_expensive(whiskeys: &[WhiskeyRecord]) -> Vec<WhiskeyRecord> {
    let mut priced: Vec<&WhiskeyRecord> = whiskeys
        .iter()
        .filter(|w| w.purchase_price.is_some_and(|p| p > 0.0))
        .collect();
    priced.sort_by(|a, b| {
        let pa = a.purchase_price.unwrap_or(0.0);
        let pb = b.purchase_price.unwrap_or(0.0);
        pb.partial_cmp(&pa).unwrap_or(Ordering::Equal)
    });
    priced.into_iter().take(HIGHLIGHT_COUNT).cloned().collect()
}

/// Newest first; bottles without a timestamp go last in input order.
fn recently_added(whiskeys: &[WhiskeyRecord]) -> Vec<WhiskeyRecord> {
    let mut ordered: Vec<&WhiskeyRecord> = whiskeys.iter().collect();
    ordered.sort_by(|a, b| match (a.created_at, b.created_at) {
        (Some(ta), Some(tb)) => tb.cmp(&ta),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    ordered.into_iter().take(HIGHLIGHT_COUNT).cloned().collect()
}
