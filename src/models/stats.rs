use serde::Serialize;

use crate::models::whiskey::{WhiskeyRecord, WhiskeyType};

/// Count and spend for one whiskey style.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TypeBreakdown {
    #[serde(rename = "type")]
    pub whiskey_type: WhiskeyType,
    pub count: usize,
    pub value: f64,
}

/// Summary figures for the statistics view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionStats {
    pub total_bottles: usize,
    pub total_value: f64,
    pub type_breakdown: Vec<TypeBreakdown>,
    pub most_expensive: Vec<WhiskeyRecord>,
    pub recently_added: Vec<WhiskeyRecord>,
    pub avg_rating: f64,
}
