mod fixtures;

use std::collections::HashSet;

use dram_pairing::models::recommendation::Recommendation;
use dram_pairing::models::whiskey::{WhiskeyRecord, WhiskeyType};
use dram_pairing::services::catalog::CATALOG;
use dram_pairing::services::recommender::{
    category_scores, recommend_for_collection, recommend_for_whiskey, MAX_COLLECTION_RESULTS,
    MAX_SINGLE_RESULTS,
};
use strum::IntoEnumIterator;

/// Label of the category a catalog title belongs to.
fn category_of(title: &str) -> &'static str {
    CATALOG
        .iter()
        .find(|c| c.entries.iter().any(|e| e.title == title))
        .map(|c| c.label)
        .unwrap_or_else(|| panic!("{title} is not in the catalog"))
}

fn categories(recs: &[Recommendation]) -> Vec<&'static str> {
    recs.iter().map(|r| category_of(&r.title)).collect()
}

fn assert_well_formed(recs: &[Recommendation], limit: usize) {
    assert!(recs.len() <= limit, "{} results exceeds {limit}", recs.len());
    let titles: HashSet<_> = recs.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles.len(), recs.len(), "duplicate titles in {recs:?}");
    for rec in recs {
        assert!(
            (65..=98).contains(&rec.match_score),
            "{} has match score {}",
            rec.title,
            rec.match_score
        );
    }
}

#[test]
fn test_high_proof_scotch_favors_smoke_and_intensity() {
    let recs = recommend_for_whiskey(&fixtures::islay_scotch());
    assert_well_formed(&recs, MAX_SINGLE_RESULTS);

    let cats = categories(&recs);
    assert_eq!(cats[0], "complex_intense");
    assert!(cats.contains(&"peated_smoky"));
    assert!(!cats.contains(&"budget_value"));

    let peated = cats.iter().position(|c| *c == "peated_smoky").unwrap();
    let complex = cats.iter().position(|c| *c == "complex_intense").unwrap();
    assert!(complex < peated);

    assert_eq!(recs[0].title, "Steins;Gate");
    assert_eq!(recs[0].match_score, 83);
    assert_eq!(recs[2].title, "Berserk (1997)");
    assert_eq!(recs[2].match_score, 77);
}

#[test]
fn test_cheap_bourbon_is_smooth_and_value_not_premium() {
    let recs = recommend_for_whiskey(&fixtures::cheap_bourbon());
    assert_well_formed(&recs, MAX_SINGLE_RESULTS);
    assert_eq!(recs.len(), MAX_SINGLE_RESULTS);

    let cats = categories(&recs);
    assert_eq!(
        &cats[..4],
        [
            "smooth_approachable",
            "smooth_approachable",
            "budget_value",
            "budget_value",
        ]
    );
    assert!(!cats.contains(&"premium_allocated"));

    let premium = category_scores(&fixtures::cheap_bourbon())
        .into_iter()
        .find(|s| s.category.label == "premium_allocated")
        .unwrap();
    assert_eq!(premium.raw, 0);
}

#[test]
fn test_bare_irish_record_still_recommends() {
    let recs = recommend_for_whiskey(&fixtures::bare_irish());
    assert_well_formed(&recs, MAX_SINGLE_RESULTS);
    assert!(!recs.is_empty());
    assert!(categories(&recs).contains(&"irish_easy"));

    let frieren = recs
        .iter()
        .find(|r| r.title == "Frieren: Beyond Journey's End")
        .unwrap();
    // raw 45 scales to 50 and is lifted to the floor
    assert_eq!(frieren.match_score, 65);
}

#[test]
fn test_every_type_with_no_optional_fields_gets_results() {
    for whiskey_type in WhiskeyType::iter() {
        let recs = recommend_for_whiskey(&WhiskeyRecord::new("Unnamed", whiskey_type));
        assert!(!recs.is_empty(), "{whiskey_type} produced nothing");
        assert_well_formed(&recs, MAX_SINGLE_RESULTS);
    }
}

#[test]
fn test_results_are_deterministic() {
    for whiskey in fixtures::mixed_collection() {
        let first = recommend_for_whiskey(&whiskey);
        let second = recommend_for_whiskey(&whiskey);
        assert_eq!(first, second);
    }
}

#[test]
fn test_calls_do_not_affect_each_other() {
    let scotch_alone = recommend_for_whiskey(&fixtures::islay_scotch());
    let _ = recommend_for_whiskey(&fixtures::allocated_bourbon());
    let _ = recommend_for_collection(&fixtures::mixed_collection()).unwrap();
    assert_eq!(recommend_for_whiskey(&fixtures::islay_scotch()), scotch_alone);
}

#[test]
fn test_only_positive_categories_are_offered() {
    for whiskey in fixtures::mixed_collection() {
        let zero: HashSet<_> = category_scores(&whiskey)
            .into_iter()
            .filter(|s| s.raw == 0)
            .map(|s| s.category.label)
            .collect();
        for cat in categories(&recommend_for_whiskey(&whiskey)) {
            assert!(!zero.contains(cat), "{cat} scored 0 for {}", whiskey.name);
        }
    }
}

#[test]
fn test_uniform_collection_matches_single_bottle_top_category() {
    for whiskey in [fixtures::islay_scotch(), fixtures::cheap_bourbon(), fixtures::bare_irish()] {
        let collection = vec![whiskey.clone(); 4];
        let profile = recommend_for_collection(&collection).unwrap();
        let top = category_scores(&whiskey)[0].category.display_label();
        assert_eq!(profile.top_category, top);
    }
}

#[test]
fn test_uniform_collection_averages_scores() {
    let single = recommend_for_whiskey(&fixtures::cheap_bourbon());
    let profile = recommend_for_collection(&vec![fixtures::cheap_bourbon(); 3]).unwrap();

    assert_eq!(profile.top_category, "smooth approachable");
    assert_eq!(profile.recommendations.len(), MAX_COLLECTION_RESULTS);
    assert_eq!(&profile.recommendations[..single.len()], &single[..]);
}

#[test]
fn test_mixed_collection_profile_is_bounded() {
    let profile = recommend_for_collection(&fixtures::mixed_collection()).unwrap();
    assert!(!profile.top_category.is_empty());
    assert!(!profile.top_category.contains('_'));
    assert_well_formed(&profile.recommendations, MAX_COLLECTION_RESULTS);
}

#[test]
fn test_collection_ranks_by_summed_score() {
    let profile = recommend_for_collection(&fixtures::mixed_collection()).unwrap();
    let scores: Vec<u8> = profile.recommendations.iter().map(|r| r.match_score).collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]), "{scores:?}");
}
