pub mod distillery;
pub mod recommendation;
pub mod stats;
pub mod whiskey;
