use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::models::distillery::{
    DistilleriesView, DistilleryGroup, DistilleryOverview, DistillerySort, UNKNOWN_DISTILLERY,
};
use crate::models::whiskey::WhiskeyRecord;

/// Country filter value that keeps every group.
const ALL_COUNTRIES: &str = "all";

/// Build the distillery view: grouped, filtered and ordered, plus the
/// collection-wide overview (which ignores the filters).
pub fn distilleries_view(
    whiskeys: &[WhiskeyRecord],
    search: Option<&str>,
    country: Option<&str>,
    sort: DistillerySort,
) -> DistilleriesView {
    let groups = group_by_distillery(whiskeys);
    let stats = overview(whiskeys, groups.len());

    let mut distilleries = filter_groups(groups, search, country);
    sort_groups(&mut distilleries, sort);

    DistilleriesView {
        distilleries,
        stats,
    }
}

/// Group bottles by distillery, in order of first appearance. Bottles with no
/// distillery (or an empty one) land in [`UNKNOWN_DISTILLERY`].
pub fn group_by_distillery(whiskeys: &[WhiskeyRecord]) -> Vec<DistilleryGroup> {
    let mut grouped: Vec<(String, Vec<&WhiskeyRecord>)> = Vec::new();
    for w in whiskeys {
        let key = distillery_name(w);
        match grouped.iter_mut().find(|(name, _)| name == key) {
            Some((_, bottles)) => bottles.push(w),
            None => grouped.push((key.to_string(), vec![w])),
        }
    }

    grouped
        .into_iter()
        .map(|(name, bottles)| summarize(name, &bottles))
        .collect()
}

fn distillery_name(w: &WhiskeyRecord) -> &str {
    w.distillery
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(UNKNOWN_DISTILLERY)
}

/// An entry recording zero bottles still counts as one.
fn bottle_count(w: &WhiskeyRecord) -> u32 {
    w.number_of_bottles.max(1)
}

fn summarize(name: String, bottles: &[&WhiskeyRecord]) -> DistilleryGroup {
    let first = bottles[0];

    let ratings: Vec<u8> = bottles
        .iter()
        .filter_map(|b| b.rating)
        .filter(|r| *r > 0)
        .collect();
    let avg_rating = if ratings.is_empty() {
        0.0
    } else {
        ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / ratings.len() as f64
    };

    let mut types = Vec::new();
    for b in bottles {
        if !types.contains(&b.whiskey_type) {
            types.push(b.whiskey_type);
        }
    }

    let avg_fill = bottles
        .iter()
        .map(|b| b.current_bottle_fill_percentage)
        .sum::<f64>()
        / bottles.len() as f64;

    DistilleryGroup {
        slug: slugify(&name),
        country: first.country.clone(),
        region: first.region.clone(),
        total_bottles: bottles.iter().map(|b| bottle_count(b)).sum(),
        opened_bottles: bottles.iter().map(|b| b.bottles_opened).sum(),
        total_value: bottles.iter().filter_map(|b| b.purchase_price).sum(),
        avg_rating,
        rated_count: ratings.len(),
        types,
        avg_fill,
        bottles: bottles.iter().map(|b| (*b).clone()).collect(),
        name,
    }
}

/// Lowercase, collapse whitespace runs to `-`, then percent-encode everything
/// outside the URI-component unreserved set.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        let mut buf = [0; 4];
        for byte in c.encode_utf8(&mut buf).bytes() {
            if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
                slug.push(char::from(byte));
            } else {
                slug.push_str(&format!("%{byte:02X}"));
            }
        }
    }
    slug
}

/// Collection-wide totals. `total_distilleries` counts groups before any
/// filter is applied.
pub fn overview(whiskeys: &[WhiskeyRecord], total_distilleries: usize) -> DistilleryOverview {
    let unique_countries: BTreeSet<&str> = whiskeys
        .iter()
        .filter_map(|w| w.country.as_deref())
        .filter(|c| !c.is_empty())
        .collect();

    DistilleryOverview {
        total_distilleries,
        total_bottle_count: whiskeys.iter().map(bottle_count).sum(),
        total_value: whiskeys.iter().filter_map(|w| w.purchase_price).sum(),
        unique_countries: unique_countries.into_iter().map(str::to_string).collect(),
    }
}

/// Keep groups matching the search text (name, country or region) and the
/// exact country filter.
pub fn filter_groups(
    groups: Vec<DistilleryGroup>,
    search: Option<&str>,
    country: Option<&str>,
) -> Vec<DistilleryGroup> {
    let query = search.filter(|q| !q.is_empty()).map(str::to_lowercase);
    let country = country.filter(|c| *c != ALL_COUNTRIES);

    groups
        .into_iter()
        .filter(|g| match &query {
            Some(q) => std::iter::once(g.name.as_str())
                .chain(g.country.as_deref())
                .chain(g.region.as_deref())
                .any(|field| field.to_lowercase().contains(q.as_str())),
            None => true,
        })
        .filter(|g| match country {
            Some(c) => g.country.as_deref() == Some(c),
            None => true,
        })
        .collect()
}

/// Stable sort; groups that compare equal keep their first-appearance order.
pub fn sort_groups(groups: &mut [DistilleryGroup], sort: DistillerySort) {
    use DistillerySort::*;

    let descending = matches!(sort, BottlesDesc | ValueDesc | NameDesc | RatingDesc);
    groups.sort_by(|a, b| {
        let ord = match sort {
            BottlesDesc | BottlesAsc => a.bottles.len().cmp(&b.bottles.len()),
            ValueDesc | ValueAsc => a
                .total_value
                .partial_cmp(&b.total_value)
                .unwrap_or(Ordering::Equal),
            NameAsc | NameDesc => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
            RatingDesc => a
                .avg_rating
                .partial_cmp(&b.avg_rating)
                .unwrap_or(Ordering::Equal),
        };
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
}
