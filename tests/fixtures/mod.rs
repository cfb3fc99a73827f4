//! Whiskey fixtures shared by the integration tests

#![allow(dead_code)]

use dram_pairing::models::whiskey::{WhiskeyRecord, WhiskeyType};

/// High-proof Islay scotch with smoky notes.
pub fn islay_scotch() -> WhiskeyRecord {
    let mut w = WhiskeyRecord::new("Test Dram", WhiskeyType::Scotch);
    w.abv = Some(55.0);
    w.purchase_price = Some(95.0);
    w.age_statement = Some(16);
    w.country = Some("Scotland".to_string());
    w.region = Some("Islay".to_string());
    w.tasting_notes = Some("intensely smoky and peaty".to_string());
    w
}

/// Cheap young bourbon with a good rating.
pub fn cheap_bourbon() -> WhiskeyRecord {
    let mut w = WhiskeyRecord::new("Evan Williams", WhiskeyType::Bourbon);
    w.abv = Some(40.0);
    w.purchase_price = Some(25.0);
    w.rating = Some(4);
    w
}

/// Irish whiskey with nothing but name and type.
pub fn bare_irish() -> WhiskeyRecord {
    WhiskeyRecord::new("Test", WhiskeyType::Irish)
}

pub fn japanese_blend() -> WhiskeyRecord {
    let mut w = WhiskeyRecord::new("Hibiki Harmony", WhiskeyType::Japanese);
    w.distillery = Some("Suntory".to_string());
    w.country = Some("Japan".to_string());
    w.abv = Some(43.0);
    w.purchase_price = Some(90.0);
    w.rating = Some(5);
    w.tasting_notes = Some("floral, honey, orange peel".to_string());
    w
}

pub fn allocated_bourbon() -> WhiskeyRecord {
    let mut w = WhiskeyRecord::new("George T. Stagg", WhiskeyType::Bourbon);
    w.distillery = Some("Buffalo Trace".to_string());
    w.abv = Some(64.5);
    w.purchase_price = Some(499.0);
    w.age_statement = Some(15);
    w.rating = Some(5);
    w.tasting_notes = Some("dark chocolate, leather, cherry".to_string());
    w
}

/// A varied shelf used for collection-level tests.
pub fn mixed_collection() -> Vec<WhiskeyRecord> {
    vec![
        islay_scotch(),
        cheap_bourbon(),
        bare_irish(),
        japanese_blend(),
        allocated_bourbon(),
    ]
}
