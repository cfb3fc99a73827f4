pub mod catalog;
pub mod distilleries;
pub mod recommender;
pub mod scoring;
pub mod stats;
