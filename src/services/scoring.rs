//! Per-category affinity rules.
//!
//! Every rule is a sum of independent, non-negative point contributions. A
//! rule never fails: missing numbers fall back to the defaults below, and a
//! zero-valued optional number counts as "not recorded" wherever a rule asks
//! whether the value is present at all.

use crate::models::whiskey::{WhiskeyRecord, WhiskeyType};

/// ABV assumed when none is recorded.
pub const DEFAULT_ABV: f64 = 40.0;

/// Purchase price assumed by the everyday-bottle rules.
pub const DEFAULT_PRICE: f64 = 30.0;

const WHEATED_BRANDS: &[&str] = &["maker", "weller", "pappy", "wheated"];
const WHEATED_NOTES: &[&str] = &["sweet", "caramel", "vanilla", "honey", "butterscotch"];

const HIGH_RYE_BRANDS: &[&str] = &["four roses", "bulleit", "wild turkey", "rittenhouse"];
const HIGH_RYE_NOTES: &[&str] = &["spic", "pepper", "cinnamon", "rye", "bold"];

const ALLOCATED_BRANDS: &[&str] = &["pappy", "george t. stagg", "william larue", "btac"];

const SINGLE_BARREL_CUES: &[&str] = &[
    "single barrel",
    "barrel select",
    "barrel pick",
    "store pick",
];

const JAPANESE_BRANDS: &[&str] = &["yamazaki", "hibiki", "nikka", "hakushu", "suntory"];

const PEATED_BRANDS: &[&str] = &["islay", "laphroaig", "ardbeg", "lagavulin", "caol ila", "peat"];
const PEATED_NOTES: &[&str] = &["peat", "smoke", "campfire", "iodine", "ash"];

const IRISH_BRANDS: &[&str] = &["jameson", "redbreast", "green spot", "powers", "bushmills"];

const DESSERT_BRANDS: &[&str] = &["cream", "honey", "liqueur", "egg nog", "fireball", "skrewball"];
const DESSERT_NOTES: &[&str] = &["cream", "chocolate", "coffee", "dessert", "sweet"];

const ADVENTURE_NOTES: &[&str] = &[
    "tropical",
    "exotic",
    "unique",
    "unusual",
    "experimental",
    "finish",
    "cask",
    "barrel",
];
const HOME_COUNTRIES: &[&str] = &["USA", "Scotland"];

const SOCIAL_NOTES: &[&str] = &["smooth", "easy", "light", "friendly", "fun"];

const NOIR_NOTES: &[&str] = &[
    "dark", "oak", "leather", "tobacco", "smoke", "char", "espresso", "bitter", "tannic", "dry",
];
const NOIR_BRANDS: &[&str] = &["black", "dark", "night", "shadow"];

const ROMANCE_NOTES: &[&str] = &[
    "floral", "fruit", "berry", "cherry", "apple", "rose", "elegant", "delicate", "soft", "gentle",
];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn notes_match(w: &WhiskeyRecord, needles: &[&str]) -> bool {
    w.notes_text()
        .is_some_and(|notes| contains_any(&notes, needles))
}

fn brand_match(w: &WhiskeyRecord, needles: &[&str]) -> bool {
    contains_any(&w.brand_text(), needles)
}

/// A recorded, non-zero number.
fn recorded(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

fn recorded_age(w: &WhiskeyRecord) -> Option<u32> {
    w.age_statement.filter(|age| *age != 0)
}

fn rating(w: &WhiskeyRecord) -> u8 {
    w.rating.unwrap_or(0)
}

fn is_type(w: &WhiskeyRecord, types: &[WhiskeyType]) -> bool {
    types.contains(&w.whiskey_type)
}

fn points(condition: bool, value: u32) -> u32 {
    if condition {
        value
    } else {
        0
    }
}

pub fn smooth_approachable(w: &WhiskeyRecord) -> u32 {
    let abv = w.abv.unwrap_or(DEFAULT_ABV);
    let price = w.purchase_price.unwrap_or(DEFAULT_PRICE);
    points(abv <= 46.0, 30)
        + points(price <= 50.0, 20)
        + points(is_type(w, &[WhiskeyType::Bourbon, WhiskeyType::Blended]), 15)
        + points(rating(w) >= 4, 10)
        + points(recorded_age(w).is_none_or(|age| age <= 8), 10)
}

pub fn complex_intense(w: &WhiskeyRecord) -> u32 {
    let abv = w.abv.unwrap_or(DEFAULT_ABV);
    let price = w.purchase_price.unwrap_or(DEFAULT_PRICE);
    let proof = if abv >= 50.0 {
        35
    } else if abv >= 46.0 {
        20
    } else {
        0
    };
    proof
        + points(price >= 80.0, 15)
        + points(recorded_age(w).is_some_and(|age| age >= 10), 15)
        + points(is_type(w, &[WhiskeyType::Scotch, WhiskeyType::SingleMalt]), 10)
}

pub fn classic_traditional(w: &WhiskeyRecord) -> u32 {
    let price = w.purchase_price.unwrap_or(DEFAULT_PRICE);
    points(recorded_age(w).is_some_and(|age| age >= 10), 25)
        + points((50.0..=150.0).contains(&price), 20)
        + points(is_type(w, &[WhiskeyType::Bourbon, WhiskeyType::Scotch]), 15)
        + points(rating(w) >= 4, 15)
}

pub fn budget_value(w: &WhiskeyRecord) -> u32 {
    let price = w.purchase_price.unwrap_or(DEFAULT_PRICE);
    let value = if price > 0.0 && price <= 35.0 {
        35
    } else if price <= 50.0 {
        15
    } else {
        0
    };
    value
        + points(rating(w) >= 4, 25)
        + points(is_type(w, &[WhiskeyType::Bourbon, WhiskeyType::Rye]), 10)
}

pub fn wheated_sweet(w: &WhiskeyRecord) -> u32 {
    let abv = w.abv.unwrap_or(DEFAULT_ABV);
    points(brand_match(w, WHEATED_BRANDS), 35)
        + points(abv <= 46.0, 15)
        + points(w.whiskey_type == WhiskeyType::Bourbon, 10)
        + points(notes_match(w, WHEATED_NOTES), 20)
}

pub fn high_rye_spicy(w: &WhiskeyRecord) -> u32 {
    points(w.whiskey_type == WhiskeyType::Rye, 40)
        + points(brand_match(w, HIGH_RYE_BRANDS), 25)
        + points(recorded(w.abv).is_some_and(|abv| abv >= 45.0), 10)
        + points(notes_match(w, HIGH_RYE_NOTES), 20)
}

pub fn premium_allocated(w: &WhiskeyRecord) -> u32 {
    let price = w.purchase_price.unwrap_or(0.0);
    let tier = if price >= 200.0 {
        35
    } else if price >= 100.0 {
        15
    } else {
        0
    };
    tier + points(recorded_age(w).is_some_and(|age| age >= 15), 20)
        + points(rating(w) >= 5, 15)
        + points(brand_match(w, ALLOCATED_BRANDS), 30)
}

pub fn single_barrel_unique(w: &WhiskeyRecord) -> u32 {
    points(brand_match(w, SINGLE_BARREL_CUES), 35)
        + points(recorded(w.purchase_price).is_some_and(|price| price >= 60.0), 10)
        + points(recorded(w.abv).is_some_and(|abv| abv >= 50.0), 15)
        + points(is_type(w, &[WhiskeyType::Bourbon, WhiskeyType::Rye]), 10)
}

pub fn japanese_refined(w: &WhiskeyRecord) -> u32 {
    points(w.whiskey_type == WhiskeyType::Japanese, 45)
        + points(w.country.as_deref() == Some("Japan"), 40)
        + points(brand_match(w, JAPANESE_BRANDS), 25)
}

pub fn peated_smoky(w: &WhiskeyRecord) -> u32 {
    let islay = w
        .region
        .as_deref()
        .is_some_and(|region| region.to_lowercase() == "islay");
    points(is_type(w, &[WhiskeyType::Scotch, WhiskeyType::SingleMalt]), 15)
        + points(brand_match(w, PEATED_BRANDS), 40)
        + points(notes_match(w, PEATED_NOTES), 25)
        + points(islay, 30)
}

pub fn irish_easy(w: &WhiskeyRecord) -> u32 {
    points(w.whiskey_type == WhiskeyType::Irish, 45)
        + points(w.country.as_deref() == Some("Ireland"), 40)
        + points(brand_match(w, IRISH_BRANDS), 25)
}

pub fn cozy_dessert(w: &WhiskeyRecord) -> u32 {
    points(brand_match(w, DESSERT_BRANDS), 45)
        + points(w.whiskey_type == WhiskeyType::Blended, 10)
        + points(recorded(w.abv).is_some_and(|abv| abv <= 35.0), 20)
        + points(notes_match(w, DESSERT_NOTES), 15)
}

pub fn adventure_seeker(w: &WhiskeyRecord) -> u32 {
    let price = w.purchase_price.unwrap_or(0.0);
    let far_from_home = w
        .country
        .as_deref()
        .is_some_and(|country| !country.is_empty() && !HOME_COUNTRIES.contains(&country));
    points(recorded(w.abv).is_some_and(|abv| abv >= 50.0), 15)
        + points(price >= 60.0, 10)
        + points(is_type(w, &[WhiskeyType::Japanese, WhiskeyType::Irish]), 10)
        + points(far_from_home, 15)
        + points(recorded_age(w).is_some_and(|age| age >= 12), 10)
        + points(notes_match(w, ADVENTURE_NOTES), 20)
}

pub fn comedy_social(w: &WhiskeyRecord) -> u32 {
    let price = w.purchase_price.unwrap_or(DEFAULT_PRICE);
    points(price <= 40.0, 15)
        + points(is_type(w, &[WhiskeyType::Bourbon, WhiskeyType::Blended]), 10)
        + points(w.number_of_bottles >= 2, 15)
        + points(recorded(w.abv).is_some_and(|abv| abv <= 45.0), 15)
        + points(notes_match(w, SOCIAL_NOTES), 15)
        + points(w.number_of_bottles >= 3, 10)
}

pub fn dark_noir(w: &WhiskeyRecord) -> u32 {
    points(is_type(w, &[WhiskeyType::Scotch, WhiskeyType::SingleMalt]), 15)
        + points(recorded(w.abv).is_some_and(|abv| abv >= 46.0), 10)
        + points(recorded_age(w).is_some_and(|age| age >= 12), 10)
        + points(notes_match(w, NOIR_NOTES), 30)
        + points(brand_match(w, NOIR_BRANDS), 15)
}

pub fn romance_refined(w: &WhiskeyRecord) -> u32 {
    points(is_type(w, &[WhiskeyType::Bourbon, WhiskeyType::Irish]), 10)
        + points(recorded(w.abv).is_some_and(|abv| abv <= 46.0), 10)
        + points(notes_match(w, ROMANCE_NOTES), 30)
        + points(recorded(w.purchase_price).is_some_and(|price| price >= 50.0), 10)
        + points(rating(w) >= 4, 10)
}

pub fn sports_competition(w: &WhiskeyRecord) -> u32 {
    points(rating(w) >= 4, 15)
        + points(w.number_of_bottles >= 2, 10)
        + points(is_type(w, &[WhiskeyType::Bourbon, WhiskeyType::Rye]), 10)
        + points(recorded(w.purchase_price).is_some_and(|price| price <= 60.0), 10)
        + points(recorded(w.abv).is_some_and(|abv| (43.0..=50.0).contains(&abv)), 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bourbon() -> WhiskeyRecord {
        WhiskeyRecord::new("Buffalo Trace", WhiskeyType::Bourbon)
    }

    #[test]
    fn test_smooth_uses_defaults_when_empty() {
        // abv 40 and price 30 defaults, no age statement
        assert_eq!(smooth_approachable(&bourbon()), 30 + 20 + 15 + 10);
    }

    #[test]
    fn test_complex_proof_tiers() {
        let mut w = WhiskeyRecord::new("Cask Strength", WhiskeyType::Scotch);
        w.abv = Some(47.0);
        assert_eq!(complex_intense(&w), 20 + 10);
        w.abv = Some(58.0);
        w.purchase_price = Some(90.0);
        w.age_statement = Some(12);
        assert_eq!(complex_intense(&w), 35 + 15 + 15 + 10);
    }

    #[test]
    fn test_budget_zero_price_gets_lower_tier() {
        let mut w = bourbon();
        w.purchase_price = Some(0.0);
        assert_eq!(budget_value(&w), 15 + 10);
        w.purchase_price = Some(22.0);
        w.rating = Some(4);
        assert_eq!(budget_value(&w), 35 + 25 + 10);
    }

    #[test]
    fn test_premium_requires_price_or_prestige() {
        let mut w = bourbon();
        w.purchase_price = Some(25.0);
        w.rating = Some(4);
        assert_eq!(premium_allocated(&w), 0);

        w.name = "Pappy Van Winkle 15".to_string();
        w.purchase_price = Some(250.0);
        w.age_statement = Some(15);
        assert_eq!(premium_allocated(&w), 35 + 20 + 30);
    }

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        let mut w = WhiskeyRecord::new("LAPHROAIG 10", WhiskeyType::Scotch);
        w.tasting_notes = Some("Campfire SMOKE, seaweed".to_string());
        w.region = Some("Islay".to_string());
        assert_eq!(peated_smoky(&w), 15 + 40 + 25 + 30);
    }

    #[test]
    fn test_distillery_counts_toward_brand_cues() {
        let mut w = WhiskeyRecord::new("Small Batch", WhiskeyType::Bourbon);
        assert_eq!(high_rye_spicy(&w), 0);
        w.distillery = Some("Four Roses".to_string());
        assert_eq!(high_rye_spicy(&w), 25);
    }

    #[test]
    fn test_origin_rules_reward_type_and_country() {
        let mut w = WhiskeyRecord::new("Test", WhiskeyType::Irish);
        assert_eq!(irish_easy(&w), 45);
        w.country = Some("Ireland".to_string());
        w.name = "Redbreast 12".to_string();
        assert_eq!(irish_easy(&w), 45 + 40 + 25);

        let mut j = WhiskeyRecord::new("Hibiki Harmony", WhiskeyType::Japanese);
        j.country = Some("Japan".to_string());
        assert_eq!(japanese_refined(&j), 45 + 40 + 25);
    }

    #[test]
    fn test_zero_abv_counts_as_unrecorded() {
        let mut w = WhiskeyRecord::new("Honey Liqueur", WhiskeyType::Blended);
        w.abv = Some(0.0);
        assert_eq!(cozy_dessert(&w), 45 + 10);
        w.abv = Some(30.0);
        assert_eq!(cozy_dessert(&w), 45 + 10 + 20);
    }

    #[test]
    fn test_adventure_skips_home_countries() {
        let mut w = WhiskeyRecord::new("Amrut Fusion", WhiskeyType::SingleMalt);
        w.country = Some("Scotland".to_string());
        assert_eq!(adventure_seeker(&w), 0);
        w.country = Some("India".to_string());
        w.tasting_notes = Some("tropical fruit, port cask finish".to_string());
        assert_eq!(adventure_seeker(&w), 15 + 20);
    }

    #[test]
    fn test_comedy_rewards_stocked_shelves() {
        let mut w = bourbon();
        w.number_of_bottles = 3;
        // default price 30 applies, abv unrecorded
        assert_eq!(comedy_social(&w), 15 + 10 + 15 + 10);
    }

    #[test]
    fn test_sports_abv_band_is_inclusive() {
        let mut w = WhiskeyRecord::new("Rittenhouse", WhiskeyType::Rye);
        w.abv = Some(50.0);
        assert_eq!(sports_competition(&w), 10 + 10);
        w.abv = Some(50.5);
        assert_eq!(sports_competition(&w), 10);
    }

    #[test]
    fn test_more_signals_never_lower_a_score() {
        let base = bourbon();
        let mut richer = base.clone();
        richer.rating = Some(5);
        richer.tasting_notes = Some("caramel, oak, cherry, smooth".to_string());
        assert!(wheated_sweet(&richer) >= wheated_sweet(&base));
        assert!(dark_noir(&richer) >= dark_noir(&base));
        assert!(romance_refined(&richer) >= romance_refined(&base));
        assert!(comedy_social(&richer) >= comedy_social(&base));
    }
}
