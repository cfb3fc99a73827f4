use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

/// Whiskey styles tracked by the collection.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, EnumString, EnumIter, Display, PartialEq, Eq, Hash,
)]
pub enum WhiskeyType {
    Bourbon,
    Scotch,
    Rye,
    Irish,
    Japanese,
    #[serde(rename = "Single Malt")]
    #[strum(serialize = "Single Malt")]
    SingleMalt,
    Blended,
}

/// One bottle entry as stored in the collection.
///
/// Only `name` and `type` are required on the wire. Everything the scoring
/// rules read is optional and gets a neutral default at scoring time.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WhiskeyRecord {
    #[serde(default)]
    #[garde(skip)]
    pub id: Option<Uuid>,

    #[garde(length(min = 1, max = 200))]
    pub name: String,

    #[serde(rename = "type")]
    #[garde(skip)]
    pub whiskey_type: WhiskeyType,

    #[serde(default)]
    #[garde(length(max = 200))]
    pub distillery: Option<String>,

    #[serde(default)]
    #[garde(length(max = 100))]
    pub country: Option<String>,

    #[serde(default)]
    #[garde(length(max = 200))]
    pub region: Option<String>,

    /// Age statement in years.
    #[serde(default)]
    #[garde(range(min = 0, max = 100))]
    pub age_statement: Option<u32>,

    #[serde(default)]
    #[garde(length(max = 200))]
    pub store: Option<String>,

    #[serde(default)]
    #[garde(range(min = 0.0))]
    pub purchase_price: Option<f64>,

    #[serde(default = "default_bottle_count")]
    #[garde(range(min = 1, max = 999))]
    pub number_of_bottles: u32,

    #[serde(default)]
    #[garde(range(max = 999))]
    pub bottles_opened: u32,

    #[serde(default = "default_fill_percentage")]
    #[garde(range(min = 0.0, max = 100.0))]
    pub current_bottle_fill_percentage: f64,

    #[serde(default = "default_bottle_size_ml")]
    #[garde(range(min = 50, max = 5000))]
    pub bottle_size_ml: u32,

    /// Alcohol by volume, in percent.
    #[serde(default)]
    #[garde(range(min = 0.0, max = 100.0))]
    pub abv: Option<f64>,

    #[serde(default)]
    #[garde(length(max = 2000))]
    pub tasting_notes: Option<String>,

    #[serde(default)]
    #[garde(range(min = 1, max = 5))]
    pub rating: Option<u8>,

    #[serde(default)]
    #[garde(skip)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_bottle_count() -> u32 {
    1
}

fn default_fill_percentage() -> f64 {
    100.0
}

fn default_bottle_size_ml() -> u32 {
    750
}

impl WhiskeyRecord {
    /// Minimal record with only the required columns set.
    pub fn new(name: impl Into<String>, whiskey_type: WhiskeyType) -> Self {
        Self {
            id: None,
            name: name.into(),
            whiskey_type,
            distillery: None,
            country: None,
            region: None,
            age_statement: None,
            store: None,
            purchase_price: None,
            number_of_bottles: default_bottle_count(),
            bottles_opened: 0,
            current_bottle_fill_percentage: default_fill_percentage(),
            bottle_size_ml: default_bottle_size_ml(),
            abv: None,
            tasting_notes: None,
            rating: None,
            created_at: None,
        }
    }

    /// Lowercased `name + " " + distillery`, the haystack for brand cues.
    pub fn brand_text(&self) -> String {
        let mut text = self.name.to_lowercase();
        text.push(' ');
        if let Some(distillery) = &self.distillery {
            text.push_str(&distillery.to_lowercase());
        }
        text
    }

    /// Lowercased tasting notes, if any were recorded.
    pub fn notes_text(&self) -> Option<String> {
        self.tasting_notes.as_ref().map(|notes| notes.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_type_parses_display_names() {
        assert_eq!(WhiskeyType::from_str("Single Malt").unwrap(), WhiskeyType::SingleMalt);
        assert_eq!(WhiskeyType::from_str("Bourbon").unwrap(), WhiskeyType::Bourbon);
        assert_eq!(WhiskeyType::SingleMalt.to_string(), "Single Malt");
    }

    #[test]
    fn test_minimal_json_gets_defaults() {
        let record: WhiskeyRecord =
            serde_json::from_str(r#"{"name": "Test", "type": "Irish"}"#).unwrap();
        assert_eq!(record.whiskey_type, WhiskeyType::Irish);
        assert_eq!(record.number_of_bottles, 1);
        assert_eq!(record.bottle_size_ml, 750);
        assert!(record.abv.is_none());
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_nulls_accepted_for_optional_columns() {
        let record: WhiskeyRecord = serde_json::from_str(
            r#"{"name": "Blanton's", "type": "Single Malt", "abv": null, "distillery": null}"#,
        )
        .unwrap();
        assert_eq!(record.whiskey_type, WhiskeyType::SingleMalt);
        assert!(record.distillery.is_none());
    }

    #[test]
    fn test_validation_rejects_out_of_range_rating() {
        let mut record = WhiskeyRecord::new("Weller 12", WhiskeyType::Bourbon);
        record.rating = Some(7);
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_name() {
        let record = WhiskeyRecord::new("", WhiskeyType::Rye);
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_brand_text_joins_name_and_distillery() {
        let mut record = WhiskeyRecord::new("Small Batch", WhiskeyType::Bourbon);
        record.distillery = Some("Four Roses".to_string());
        assert_eq!(record.brand_text(), "small batch four roses");
    }
}
