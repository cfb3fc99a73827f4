use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::models::whiskey::{WhiskeyRecord, WhiskeyType};

/// Group name used for bottles that do not record a distillery.
pub const UNKNOWN_DISTILLERY: &str = "Unknown Distillery";

/// Ordering applied to the distillery list.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, EnumString, Display, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DistillerySort {
    /// Most bottle entries first.
    #[default]
    BottlesDesc,
    BottlesAsc,
    ValueDesc,
    ValueAsc,
    NameAsc,
    NameDesc,
    RatingDesc,
}

/// Every bottle from one distillery plus its aggregate figures.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistilleryGroup {
    pub name: String,
    /// URL-safe key derived from the name.
    pub slug: String,
    /// Country and region as recorded on the first bottle of the group.
    pub country: Option<String>,
    pub region: Option<String>,
    pub bottles: Vec<WhiskeyRecord>,
    /// Physical bottles, counting each entry's `number_of_bottles`.
    pub total_bottles: u32,
    pub opened_bottles: u32,
    pub total_value: f64,
    /// Mean over rated bottles only; 0 when none are rated.
    pub avg_rating: f64,
    pub rated_count: usize,
    /// Distinct styles in order of first appearance.
    pub types: Vec<WhiskeyType>,
    /// Mean current fill percentage across the group's entries.
    pub avg_fill: f64,
}

/// Figures across the whole collection, independent of any filter.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DistilleryOverview {
    pub total_distilleries: usize,
    pub total_bottle_count: u32,
    pub total_value: f64,
    /// Distinct recorded countries, sorted.
    pub unique_countries: Vec<String>,
}

/// Request body for the distillery view.
#[derive(Debug, Deserialize)]
pub struct DistilleriesRequest {
    #[serde(default)]
    pub whiskeys: Vec<WhiskeyRecord>,
    /// Case-insensitive match against name, country and region.
    #[serde(default)]
    pub search: Option<String>,
    /// Exact country to keep; absent or `"all"` keeps every group.
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub sort: DistillerySort,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistilleriesView {
    pub distilleries: Vec<DistilleryGroup>,
    pub stats: DistilleryOverview,
}
